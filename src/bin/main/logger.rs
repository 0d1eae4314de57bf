use env_logger::{Builder, Env, Target};

const LOG_ENV: &str = "QUARTZ_LOG";
const DEFAULT_FILTER: &str = "quartz=info,quartz_core=info";

/// Logs go to stderr so they never interleave with the watch face on stdout.
pub fn init() {
    let env = Env::new().filter_or(LOG_ENV, DEFAULT_FILTER);
    Builder::from_env(env)
        .target(Target::Stderr)
        .format_timestamp_millis()
        .init();
}
