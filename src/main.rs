use mysh::config::ShellConfig;
use mysh::error::ShellError;
use mysh::flags::Flags;
use mysh::input::InputSource;
use mysh::logging;
use mysh::shell::Shell;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match &e {
                ShellError::Usage(usage) => eprintln!("{}", usage),
                ShellError::Flag(_) => {
                    eprintln!("mysh: {}", e);
                    eprintln!("{}", mysh::flags::USAGE);
                }
                _ => eprintln!("mysh: {}", e),
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("mysh {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(flags.is_set("debug"));
    tracing::debug!("starting with args: {:?}", args);

    let input = InputSource::detect(flags.script());
    let config = ShellConfig::from_flags(&flags, input.is_interactive());
    let source = input.open(&config)?;

    let mut shell = Shell::new(source, config);
    shell.run()
}
