use clap::{
    crate_authors, crate_description, crate_name, crate_version, error::ErrorKind, Arg, ArgAction,
    Command,
};

// The CLI layer should only parse inputs and forward them to library code.
fn main() {
    let parsed = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("project")
                .help("Project name; doubles as the target directory. Defaults to the current directory's name")
                .required(false),
        )
        .try_get_matches();

    // Wrong argument counts abort before any filesystem action. Help and
    // version requests also surface as parse errors, but are not failures.
    let matches = match parsed {
        Ok(matches) => matches,
        Err(error) => {
            let requested_info = matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );

            if error.print().is_err() || !requested_info {
                std::process::exit(1);
            }
            std::process::exit(0);
        }
    };

    let mut logger = env_logger::Builder::from_default_env();
    if matches.get_flag("verbose") {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let project = matches.get_one::<String>("project");

    if let Err(error) = projc::api::run(project.map(String::as_str)) {
        eprintln!("{:?}", miette::Report::new(error));
        std::process::exit(1);
    }
}
