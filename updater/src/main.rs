use std::io::Write;

use env_logger::{Builder, Env, Target};

use shared::{config::CONFIG_FILE, run, Config};

fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "[{}] {}", level, record.args()),
        })
        .init();
}

fn main() {
    init_logger();

    let config = Config::load_or_default(CONFIG_FILE);

    let report = run(&config);

    log::debug!("script: {}", report.script);
    log::debug!("cache busting: {}", report.cache_busting);

    if !report.success() {
        std::process::exit(1);
    }
}
