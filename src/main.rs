use kshell::flags::Flags;
use kshell::shell::Shell;
use std::env;
use tracing::Level;

fn main() -> Result<(), kshell::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("KShell {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(&flags);

    let mut shell = Shell::new(flags)?;
    let status = shell.run()?;
    std::process::exit(status)
}

fn init_logging(flags: &Flags) {
    let level = if flags.is_set("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
