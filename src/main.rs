use env_logger::Env;
use osh::repl::start_repl;
use osh::ShellConfig;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(err) = start_repl(ShellConfig::default()) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
