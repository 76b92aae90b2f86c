// src/cli.rs
use thiserror::Error;

use crate::params::Params;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Missing value for {0}")]
    MissingValue(&'static str),
    #[error("Invalid interval: {0}")]
    BadInterval(String),
    #[error("Unknown arg: {0}")]
    Unknown(String),
}

pub enum Parsed {
    Run(Params),
    Help,
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Parsed, CliError> {
    let mut params = Params::new();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--once" => params.once = true,
            "--html" => {
                let v = args.next().ok_or(CliError::MissingValue("--html"))?;
                params.html = Some(v.into()); }
            "--areas" => {
                let v = args.next().ok_or(CliError::MissingValue("--areas"))?;
                params.set_areas(&v); }
            "--interval" => {
                let v = args.next().ok_or(CliError::MissingValue("--interval"))?;
                params.interval = Some(v.parse().map_err(|_| CliError::BadInterval(v.clone()))?); }
            "-h" | "--help" => return Ok(Parsed::Help),
            _ => return Err(CliError::Unknown(a)),
        }
    }
    Ok(Parsed::Run(params))
}

#[cfg(feature = "cli")]
pub use self::app::run;

#[cfg(feature = "cli")]
mod app {
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };

    use color_eyre::Result;
    use tracing::{info, warn};

    use super::{parse_args, Parsed};
    use crate::config::Config;
    use crate::core::sanitize::mask_proxy;
    use crate::dom::{FileSource, HttpSource, PageSource};
    use crate::notify::{AlertOutcome, DiscordWebhook};
    use crate::params::Params;
    use crate::progress::Progress;
    use crate::runner::{CycleReport, Monitor};
    use crate::specs::JOBS_AT_AMAZON;

    /// One status line per cycle on stdout.
    struct StatusLine;

    impl Progress for StatusLine {
        fn log(&mut self, msg: &str) {
            println!("{msg}");
        }

        fn finish(&mut self, cycle: u64, report: &CycleReport) {
            let alert = match &report.alert {
                AlertOutcome::Sent { jobs } => format!("alert sent ({jobs})"),
                AlertOutcome::Skipped(reason) => format!("no alert ({reason:?})"),
                AlertOutcome::Failed(e) => format!("alert failed: {e}"),
            };
            match &report.error {
                Some(e) => println!("[cycle {cycle}] scrape failed: {e}"),
                None => println!(
                    "[cycle {cycle}] {} job(s), {} new, {alert}",
                    report.scraped, report.new_jobs
                ),
            }
        }
    }

    pub fn run<I: IntoIterator<Item = String>>(args: I) -> Result<()> {
        let params = match parse_args(args)? {
            Parsed::Help => {
                eprintln!(include_str!("cli_help.txt"));
                return Ok(());
            }
            Parsed::Run(p) => p,
        };

        let mut config = Config::from_env()?;
        params.apply(&mut config);
        crate::log::init(config.log_file.as_deref())?;

        info!(
            areas = ?config.search_areas,
            interval = config.check_interval.as_secs(),
            headless = config.headless,
            "job_scrape starting"
        );
        if let Some(proxy) = &config.proxy_url {
            info!(proxy = mask_proxy(proxy), "using proxy");
        }

        let stop = Arc::new(AtomicBool::new(false));
        {
            let stop = Arc::clone(&stop);
            ctrlc::set_handler(move || {
                stop.store(true, Ordering::SeqCst);
            })?;
        }

        let notifier = config.webhook_url.as_deref().map(DiscordWebhook::new).transpose()?;
        if notifier.is_none() {
            warn!("DISCORD_WEBHOOK_URL not set, notifications disabled");
        }

        match &params.html {
            Some(path) => drive(FileSource::new(path), notifier, &config, &params, &stop),
            None => {
                let source = HttpSource::new(&config.base_url, config.proxy_url.as_deref())?;
                drive(source, notifier, &config, &params, &stop)
            }
        }
        info!("shutdown complete");
        Ok(())
    }

    fn drive<S: PageSource>(
        source: S,
        notifier: Option<DiscordWebhook>,
        config: &Config,
        params: &Params,
        stop: &AtomicBool,
    ) {
        let mut monitor = Monitor::new(
            source,
            notifier,
            &JOBS_AT_AMAZON,
            config.search_areas.clone(),
            config.check_interval,
        );
        let mut status = StatusLine;
        if params.once {
            let report = monitor.run_once();
            status.finish(1, &report);
        } else {
            monitor.run(stop, Some(&mut status));
        }
    }
}
