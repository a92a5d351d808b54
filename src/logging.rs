#[cfg(not(debug_assertions))]
pub fn init_logging() {
    use syslog::BasicLogger;

    // only the 3164 formatter integrates with the log crate at the moment
    let logger = syslog::unix(syslog::Formatter3164::default())
        .expect("syslog initialization failed");
    log::set_boxed_logger(Box::new(BasicLogger::new(logger)))
        .map(|()| log::set_max_level(log::STATIC_MAX_LEVEL))
        .expect("syslog initialization failed");
}

#[cfg(debug_assertions)]
pub fn init_logging() {
    env_logger::init()
}
