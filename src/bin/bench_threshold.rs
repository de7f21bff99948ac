use std::{env, process};

use benchgate::{
    BenchGateError, CommandLineConfig, GateConfig, GateReport, ThresholdChecker,
    logging::{get_subscriber, init_subscriber},
};
use tracing::warn;

fn main() {
    init_subscriber(get_subscriber("warn"));

    let args: Vec<String> = env::args().collect();
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let cli = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => fail(&err),
    };
    if cli.show_help {
        print!("{}", CommandLineConfig::help());
        return;
    }
    if !cli.ignored.is_empty() {
        warn!(args = ?cli.ignored, "ignoring unrecognized arguments");
    }

    let mut config = match GateConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => fail(&err),
    };
    if let Some(root) = cli.criterion_root {
        config = config.with_root(root);
    }

    match ThresholdChecker::new(config).run() {
        Ok(report) => {
            print_summary(&report);
            println!("{}", GateReport::PASSED_LINE);
        }
        Err(err) => {
            if let BenchGateError::ThresholdExceeded { report } = &err {
                print_summary(report);
            }
            fail(&err)
        }
    }
}

fn print_summary(report: &GateReport) {
    for line in report.summary_lines() {
        println!("{line}");
    }
}

fn fail(err: &BenchGateError) -> ! {
    println!("{err}");
    process::exit(err.exit_code());
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use benchgate::CommandLineConfig;

    #[test]
    fn test_root_flag_overrides_default() {
        let cfg = CommandLineConfig::from_args(&["bench_threshold", "--root", "out/criterion"])
            .unwrap();
        assert_eq!(cfg.criterion_root, Some(PathBuf::from("out/criterion")));
        assert!(!cfg.show_help);
    }

    #[test]
    fn test_unknown_flag_is_ignored() {
        let cfg = CommandLineConfig::from_args(&["bench_threshold", "--verbose"]).unwrap();
        assert_eq!(cfg.ignored, vec!["--verbose".to_string()]);
        assert!(cfg.criterion_root.is_none());
    }
}
