use clap::crate_version;

pub const BIN_NAME: &str = "glone";

pub const HELP_TEMPLATE: &str = "usage: glone [OPTIONS...] <url>

OPTIONS:
{options}{after-help}";

pub const USAGE_FOOTER: &str = "EXAMPLES:
glone git@github.com:rajiv/glone.git
glone https://github.com/rajiv/glone.git";

pub fn version() -> String {
    format!("{} version {}", BIN_NAME, crate_version!())
}
