use clap::{crate_version, Arg, ArgAction, Command};

use crate::utils::{BIN_NAME, HELP_TEMPLATE, USAGE_FOOTER};

pub fn cli() -> Command {
    Command::new(BIN_NAME)
        .version(crate_version!())
        .author("rajiv")
        .about("Clone a git repository into $GOPATH/src/<host>/<owner>/<repo>.")
        .help_template(HELP_TEMPLATE)
        .after_help(USAGE_FOOTER)
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .long("version")
                .help("Print version and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log the resolved destination and the git command")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("repo_url")
                .value_name("URL")
                .help("Repository url, https://<host>/<owner>/<repo>[.git] or git@<host>:<owner>/<repo>[.git]")
                .num_args(1),
        )
}
