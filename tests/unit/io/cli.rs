//! Tests for command-line parsing, validation and the conversion driver

#[cfg(test)]
mod tests {
    use bilevel::algorithm::{DitherOutput, Mode};
    use bilevel::io::cli::{Cli, Converter, Job, Source};
    use bilevel::io::configuration::{DEFAULT_THRESHOLD_LEVEL, GRADIENT_SIZE};
    use bilevel::io::error::DitherError;
    use bilevel::io::gradient::Gradient;
    use bilevel::io::image::load_grayscale;
    use bilevel::io::progress::ProgressManager;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("bilevel").chain(args.iter().copied()))
    }

    fn validate(args: &[&str]) -> Result<Job, DitherError> {
        parse(args).validate()
    }

    // File input, output and one algorithm form a complete job
    #[test]
    fn test_validate_file_job() {
        let job = validate(&["-i", "in.png", "-o", "out.png", "--floyd"]).unwrap();
        assert_eq!(job.source, Source::File(PathBuf::from("in.png")));
        assert_eq!(job.output, PathBuf::from("out.png"));
        assert_eq!(job.mode, Some(Mode::FloydSteinberg));
    }

    #[test]
    fn test_validate_gradient_job() {
        let job = validate(&["--gradient", "vertical", "--output", "out.png", "--ordered"]).unwrap();
        assert_eq!(job.source, Source::Gradient(Gradient::Vertical));
        assert_eq!(job.mode, Some(Mode::Ordered));
    }

    // Every algorithm flag maps to its mode
    #[test]
    fn test_each_flag_selects_its_mode() {
        let cases = [
            ("--ordered", Mode::Ordered),
            ("-O", Mode::Ordered),
            ("--forward", Mode::Forward),
            ("-f", Mode::Forward),
            ("--both", Mode::Serpentine),
            ("-b", Mode::Serpentine),
            ("--floyd", Mode::FloydSteinberg),
            ("-F", Mode::FloydSteinberg),
        ];
        for (flag, mode) in cases {
            let job = validate(&["-g", "horizontal", "-o", "out.png", flag]).unwrap();
            assert_eq!(job.mode, Some(mode), "flag {flag}");
        }
    }

    // A bare --threshold uses the default level
    #[test]
    fn test_threshold_default_level() {
        let job = validate(&["-g", "horizontal", "-o", "out.png", "--threshold"]).unwrap();
        assert_eq!(
            job.mode,
            Some(Mode::Threshold {
                level: DEFAULT_THRESHOLD_LEVEL
            })
        );
    }

    // The level value is optional on the command line
    #[test]
    fn test_threshold_level_is_optional() {
        assert_eq!(parse(&["-t"]).threshold, Some(None));
        assert_eq!(parse(&["-t", "0.75"]).threshold, Some(Some(0.75)));
        assert_eq!(parse(&["-F"]).threshold, None);
    }

    #[test]
    fn test_threshold_explicit_level() {
        let job = validate(&["-g", "horizontal", "-o", "out.png", "--threshold", "0.25"]).unwrap();
        assert_eq!(job.mode, Some(Mode::Threshold { level: 0.25 }));
    }

    #[test]
    fn test_threshold_out_of_range() {
        let result = validate(&["-g", "horizontal", "-o", "out.png", "-t", "1.5"]);
        assert!(matches!(result, Err(DitherError::InvalidParameter { .. })));
    }

    #[test]
    fn test_random_with_seed() {
        let job = validate(&["-g", "horizontal", "-o", "out.png", "--random", "--seed", "7"]).unwrap();
        assert_eq!(job.mode, Some(Mode::Random { seed: 7 }));
    }

    // Without --seed a seed is still chosen
    #[test]
    fn test_random_without_seed() {
        let job = validate(&["-g", "horizontal", "-o", "out.png", "-r"]).unwrap();
        assert!(matches!(job.mode, Some(Mode::Random { .. })));
    }

    #[test]
    fn test_no_mode_is_passthrough() {
        let job = validate(&["-g", "horizontal", "-o", "out.png"]).unwrap();
        assert_eq!(job.mode, None);
    }

    #[test]
    fn test_conflicting_modes() {
        let cli = parse(&["-g", "horizontal", "-o", "out.png", "--ordered", "--floyd"]);
        assert_eq!(cli.selected_modes(), vec!["--ordered", "--floyd"]);

        let error = cli.validate().unwrap_err();
        assert!(matches!(error, DitherError::Configuration { .. }));
        assert!(error.to_string().contains("--ordered, --floyd"));
    }

    #[test]
    fn test_input_and_gradient_together() {
        let result = validate(&["-i", "in.png", "-g", "horizontal", "-o", "out.png"]);
        assert!(matches!(result, Err(DitherError::Configuration { .. })));
    }

    #[test]
    fn test_missing_input() {
        let result = validate(&["-o", "out.png", "--floyd"]);
        assert!(matches!(result, Err(DitherError::Configuration { .. })));
    }

    #[test]
    fn test_missing_output() {
        let result = validate(&["-i", "in.png", "--floyd"]);
        assert!(matches!(result, Err(DitherError::Configuration { .. })));
    }

    #[test]
    fn test_verbosity_and_quiet_flags() {
        let cli = parse(&["-vv", "-q"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }

    // Gradient jobs dither a full-size ramp and write it
    #[test]
    fn test_job_run_gradient() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("ramp.png");
        let job = Job {
            source: Source::Gradient(Gradient::Horizontal),
            output: output.clone(),
            mode: Some(Mode::FloydSteinberg),
        };

        let result = job.run(&ProgressManager::hidden()).unwrap();
        let bits = result.as_binary().unwrap();
        assert_eq!(bits.width(), GRADIENT_SIZE);
        assert_eq!(bits.height(), GRADIENT_SIZE);

        let written = load_grayscale(&output).unwrap();
        assert_eq!(written.width(), GRADIENT_SIZE);
        // Left edge of the ramp is white, right edge black
        assert_eq!(written.get(0, 0), Some(u16::MAX));
        assert_eq!(written.get(GRADIENT_SIZE - 1, 0), Some(0));
    }

    #[test]
    fn test_job_run_passthrough() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("gray.png");
        let job = Job {
            source: Source::Gradient(Gradient::Vertical),
            output,
            mode: None,
        };

        let result = job.run(&ProgressManager::hidden()).unwrap();
        assert!(matches!(result, DitherOutput::Passthrough(_)));
    }

    // The converter reads a file, dithers and writes the result
    #[test]
    fn test_converter_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.png");
        let output = temp_dir.path().join("out.png");
        image::GrayImage::from_fn(9, 6, |x, _| image::Luma([(x * 30) as u8]))
            .save(&input)
            .unwrap();

        let cli = parse(&[
            "-q",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--both",
        ]);
        Converter::new(cli).process().unwrap();

        let written = load_grayscale(&output).unwrap();
        assert_eq!((written.width(), written.height()), (9, 6));
        assert!(written.samples().iter().all(|&s| s == 0 || s == u16::MAX));
    }

    #[test]
    fn test_converter_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.png");
        let cli = parse(&[
            "-q",
            "-i",
            "nonexistent.png",
            "-o",
            output.to_str().unwrap(),
            "--floyd",
        ]);
        assert!(Converter::new(cli).process().is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_converter_reports_validation_errors() {
        let cli = parse(&["-q", "-g", "horizontal"]);
        assert!(matches!(
            Converter::new(cli).process(),
            Err(DitherError::Configuration { .. })
        ));
    }
}
