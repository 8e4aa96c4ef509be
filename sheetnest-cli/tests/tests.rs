#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use itertools::Itertools;
    use test_case::test_case;

    use sheetnest::entities::NestStatus;
    use sheetnest::geometry::compute_bounds;
    use sheetnest::geometry::primitives::{Curve, Point, Rect};
    use sheetnest::io::ext_repr::{ExtCurve, ExtSketch};
    use sheetnest::util::assertions;
    use sheetnest_cli::config::{MaterialPreset, NestConfig, Strategy, Units};
    use sheetnest_cli::io;
    use sheetnest_cli::io::ext_job::{ExtJob, ExtJobPart};
    use sheetnest_cli::io::output::NestOutput;
    use sheetnest_cli::job::{MAX_QUANTITY, import_parts, nest_job};
    use sheetnest_cli::layout::border_curves;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn read_job(path: &str) -> ExtJob {
        io::read_job(Path::new(path)).unwrap()
    }

    fn read_advanced_config() -> NestConfig {
        io::read_config(Path::new("../assets/config_advanced.json")).unwrap()
    }

    #[test_case("../assets/bracket.json"; "bracket")]
    #[test_case("../assets/mixed_parts.json"; "mixed parts")]
    #[test_case("../assets/oversized.json"; "oversized")]
    fn job_layout_is_feasible(job_path: &str) {
        init_logger();
        for config in [NestConfig::default(), read_advanced_config()] {
            let job = read_job(job_path);
            let sheet = config.sheet_spec().unwrap();
            let parts = import_parts(&job, &config).unwrap();
            let outcome = nest_job(&job, &config).unwrap();

            let occupied = outcome
                .result
                .placements
                .iter()
                .map(|pl| {
                    let part = parts.iter().find(|p| p.part.id == pl.part_id).unwrap();
                    pl.occupied(part.part.footprint(&sheet))
                })
                .collect_vec();
            assert!(assertions::within_usable_region(&occupied, &sheet));
            assert!(assertions::no_overlap(&occupied));

            for p in &parts {
                assert!(outcome.result.n_placed_of(&p.part.id) <= p.part.quantity);
            }
        }
    }

    #[test]
    fn bracket_simple_grid() {
        let job = read_job("../assets/bracket.json");
        let outcome = nest_job(&job, &NestConfig::default()).unwrap();

        assert_eq!(outcome.label, "Simple");
        assert_eq!(outcome.result.n_placed(), 20);
        assert_eq!(outcome.result.status, NestStatus::Complete);
        assert_eq!(
            outcome.message,
            "Simple nesting complete. 20 parts placed in a single sketch."
        );

        let layout = outcome.layout.unwrap();
        assert_eq!(layout.sketch.name, "Nesting Layout - Simple");
        assert_eq!(layout.n_skipped, 0);
        //border and six curves per copy
        assert_eq!(layout.sketch.curves.len(), 4 + 20 * 6);
        assert_eq!(
            layout.sketch.curves[4],
            Curve::LineSegment {
                start: Point(1.0, 1.0),
                end: Point(13.0, 1.0),
            }
        );
        assert_eq!(
            layout.sketch.curves[8],
            Curve::Circle {
                center: Point(3.0, 3.5),
                radius: 0.6,
            }
        );
    }

    #[test]
    fn bracket_without_border() {
        let job = read_job("../assets/bracket.json");
        let config = NestConfig {
            border: false,
            ..NestConfig::default()
        };
        let layout = nest_job(&job, &config).unwrap().layout.unwrap();
        assert_eq!(layout.sketch.curves.len(), 20 * 6);
    }

    #[test]
    fn bracket_advanced_rotates() {
        let job = read_job("../assets/bracket.json");
        let config = read_advanced_config();
        let outcome = nest_job(&job, &config).unwrap();

        assert_eq!(outcome.label, "Advanced");
        assert!(outcome.result.rotated);
        assert_eq!(outcome.result.n_placed(), 20);
        assert_eq!(
            outcome.message,
            "Advanced nesting complete. 20 parts placed in a single sketch. Parts were rotated for optimal yield."
        );

        //the first copy is turned a quarter and sits in the lower-left corner of the usable region
        let layout = outcome.layout.unwrap();
        let first_copy = compute_bounds(&layout.sketch.curves[4..10]).unwrap();
        let expected = Rect {
            x_min: 10.0,
            y_min: 10.0,
            x_max: 15.0,
            y_max: 22.0,
        };
        for (a, e) in [
            (first_copy.x_min, expected.x_min),
            (first_copy.y_min, expected.y_min),
            (first_copy.x_max, expected.x_max),
            (first_copy.y_max, expected.y_max),
        ] {
            assert!(approx_eq!(f64, a, e, epsilon = 1e-9));
        }
    }

    #[test]
    fn mixed_parts_shelf_packing() {
        init_logger();
        let job = read_job("../assets/mixed_parts.json");
        let outcome = nest_job(&job, &NestConfig::default()).unwrap();

        assert_eq!(outcome.label, "Shelf");
        assert_eq!(outcome.result.status, NestStatus::Complete);
        assert_eq!(outcome.result.n_placed(), 18);
        assert_eq!(outcome.result.n_placed_of("Mounting Plate"), 4);
        assert_eq!(outcome.result.n_placed_of("Gasket"), 6);
        assert!(outcome.result.rotated);
        assert!(outcome.message.starts_with("Shelf nesting complete. 18 parts"));

        let layout = outcome.layout.unwrap();
        assert_eq!(layout.sketch.name, "Nesting Layout - Shelf");
        //the unreadable gasket line is dropped on import
        let n_curves = 4 + 4 * 5 + 6 * 2 + 3 * 2 + 5 * 6;
        assert_eq!(layout.sketch.curves.len(), n_curves);
    }

    #[test]
    fn oversized_part() {
        let job = read_job("../assets/oversized.json");
        let outcome = nest_job(&job, &NestConfig::default()).unwrap();

        assert_eq!(outcome.result.status, NestStatus::PartTooLarge);
        assert!(outcome.layout.is_none());
        assert_eq!(
            outcome.message,
            "The selected sketch is too large to fit on the sheet with the current settings."
        );
    }

    #[test]
    fn grid_strategy_rejects_several_parts() {
        let job = read_job("../assets/mixed_parts.json");
        let config = NestConfig {
            strategy: Strategy::Grid,
            ..NestConfig::default()
        };
        assert!(nest_job(&job, &config).is_err());
    }

    #[test]
    fn shelf_strategy_on_single_part() {
        let job = read_job("../assets/bracket.json");
        let config = NestConfig {
            strategy: Strategy::Shelf,
            ..NestConfig::default()
        };
        let outcome = nest_job(&job, &config).unwrap();
        assert_eq!(outcome.label, "Shelf");
        assert_eq!(outcome.result.n_placed(), 20);
    }

    #[test]
    fn unreadable_sketch_aborts_job() {
        let job = ExtJob {
            parts: vec![ExtJobPart {
                sketch: ExtSketch {
                    name: "Broken".to_string(),
                    curves: vec![ExtCurve::Circle {
                        center: None,
                        radius: Some(1.0),
                    }],
                },
                quantity: None,
            }],
        };
        let err = nest_job(&job, &NestConfig::default()).unwrap_err();
        assert!(err.to_string().contains("could not compute bounding box for sketch Broken"));

        let empty = ExtJob { parts: vec![] };
        assert!(nest_job(&empty, &NestConfig::default()).is_err());
    }

    #[test]
    fn repeated_sketch_names_get_distinct_ids() {
        let mut job = read_job("../assets/bracket.json");
        job.parts.push(job.parts[0].clone());
        let parts = import_parts(&job, &NestConfig::default()).unwrap();

        assert_eq!(parts[0].part.id, "Bracket");
        assert_eq!(parts[1].part.id, "Bracket#1");
    }

    #[test]
    fn missing_quantity_uses_config() {
        let job = read_job("../assets/oversized.json");
        let config = NestConfig {
            quantity: 3,
            ..NestConfig::default()
        };
        let parts = import_parts(&job, &config).unwrap();
        assert_eq!(parts[0].part.quantity, 3);
    }

    #[test_case(Some(MAX_QUANTITY + 1), 1; "from the job")]
    #[test_case(None, usize::MAX; "from the config")]
    fn quantity_above_limit_is_rejected(job_quantity: Option<usize>, config_quantity: usize) {
        let mut job = read_job("../assets/bracket.json");
        job.parts[0].quantity = job_quantity;
        let config = NestConfig {
            quantity: config_quantity,
            ..NestConfig::default()
        };
        let err = import_parts(&job, &config).unwrap_err();
        assert!(err.to_string().contains("copies requested"));
        assert!(nest_job(&job, &config).is_err());

        job.parts[0].quantity = Some(MAX_QUANTITY);
        assert_eq!(import_parts(&job, &config).unwrap()[0].part.quantity, MAX_QUANTITY);
    }

    #[test]
    fn shelf_reports_parts_wider_than_sheet() {
        init_logger();
        let job = read_job("../assets/oversized.json");
        let config = NestConfig {
            strategy: Strategy::Shelf,
            ..NestConfig::default()
        };
        let outcome = nest_job(&job, &config).unwrap();

        assert_eq!(outcome.result.status, NestStatus::OutOfBounds);
        assert!(outcome.result.n_placed() > 0);
        assert!(outcome.message.ends_with(" Some parts extend past the edge clearance of the sheet."));
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: NestConfig = serde_json::from_str(r#"{ "mode": "advanced" }"#).unwrap();
        assert_eq!(
            config,
            NestConfig {
                mode: sheetnest::nesting::NestingMode::Advanced,
                ..NestConfig::default()
            }
        );
    }

    #[test_case(MaterialPreset::SteelSheet, Units::Cm, 300.0, 200.0)]
    #[test_case(MaterialPreset::SteelSheet, Units::M, 3.0, 2.0)]
    #[test_case(MaterialPreset::AluminumSheet, Units::Mm, 2500.0, 1250.0)]
    #[test_case(MaterialPreset::Plywood, Units::Cm, 244.0, 122.0)]
    #[test_case(MaterialPreset::Acrylic, Units::Mm, 1000.0, 600.0)]
    #[test_case(MaterialPreset::Custom, Units::Cm, 300.0, 200.0)]
    fn material_dimensions(material: MaterialPreset, units: Units, width: f64, height: f64) {
        let config = NestConfig {
            material,
            units,
            ..NestConfig::default()
        };
        let (w, h) = config.sheet_dimensions();
        assert!(approx_eq!(f64, w, width, epsilon = 1e-9));
        assert!(approx_eq!(f64, h, height, epsilon = 1e-9));
    }

    #[test]
    fn kerf_is_converted_from_millimetres() {
        let config = NestConfig {
            kerf_mm: 2.0,
            ..NestConfig::default()
        };
        let sheet = config.sheet_spec().unwrap();
        assert!(approx_eq!(f64, sheet.kerf_compensation, 0.2, epsilon = 1e-12));
        assert!(approx_eq!(f64, Units::M.convert_to_mm(1.5), 1500.0, epsilon = 1e-12));
    }

    #[test]
    fn invalid_custom_sheet_is_rejected() {
        let config = NestConfig {
            material: MaterialPreset::Custom,
            sheet_width: -5.0,
            ..NestConfig::default()
        };
        let job = read_job("../assets/bracket.json");
        assert!(config.sheet_spec().is_err());
        assert!(nest_job(&job, &config).is_err());
    }

    #[test]
    fn border_follows_sheet_outline() {
        let sheet = NestConfig::default().sheet_spec().unwrap();
        let border = border_curves(&sheet);
        assert_eq!(border.len(), 4);
        assert_eq!(
            border[0],
            Curve::LineSegment {
                start: Point(0.0, 0.0),
                end: Point(300.0, 0.0),
            }
        );
        assert_eq!(
            border[3],
            Curve::LineSegment {
                start: Point(0.0, 200.0),
                end: Point(0.0, 0.0),
            }
        );
    }

    #[test]
    fn output_serializes_to_json() {
        let job = read_job("../assets/bracket.json");
        let config = NestConfig::default();
        let outcome = nest_job(&job, &config).unwrap();
        let json = serde_json::to_value(NestOutput::new(config, &outcome)).unwrap();

        assert_eq!(json["config"]["mode"], "simple");
        assert_eq!(json["config"]["material"], "steel_sheet");
        assert_eq!(json["result"]["status"], "complete");
        assert_eq!(json["layout"]["name"], "Nesting Layout - Simple");
        assert_eq!(json["layout"]["curves"][0]["type"], "line");
        assert_eq!(json["n_skipped_curves"], 0);
    }
}
