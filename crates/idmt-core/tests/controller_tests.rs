// Integration tests for parameter reading, recompute and change notification.

use idmt_core::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Default)]
struct RecordingSurface {
    published: Vec<CurveSet>,
}

impl RenderSurface for RecordingSurface {
    fn present(&mut self, curves: CurveSet) {
        self.published.push(curves);
    }
}

fn source(values: &[(&str, &str)]) -> HashMap<ParamField, String> {
    values
        .iter()
        .map(|(id, v)| (ParamField::from_id(id).unwrap(), v.to_string()))
        .collect()
}

fn seeded_source() -> HashMap<ParamField, String> {
    source(&[
        ("IsA", "100"),
        ("TMSA", "0.2"),
        ("IsB", "120"),
        ("TMSB", "0.3"),
        ("IsC", "150"),
        ("TMSC", "0.4"),
    ])
}

#[test]
fn field_ids_round_trip_in_input_order() {
    let ids: Vec<&str> = ParamField::ALL.iter().map(|f| f.id()).collect();
    assert_eq!(ids, ["IsA", "TMSA", "IsB", "TMSB", "IsC", "TMSC"]);
    for f in ParamField::ALL {
        assert_eq!(ParamField::from_id(f.id()), Some(f));
    }
    assert_eq!(ParamField::from_id("IsD"), None);
}

#[test]
fn slot_labels() {
    let labels: Vec<&str> = RelaySlot::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, ["Rate A", "Rate B", "Rate C"]);
}

#[test]
fn recompute_seeded_settings() {
    let settings = RelaySettings::seeded();
    assert_eq!(settings.b, RelayConfig::new(120.0, 0.3));

    let curves = recompute(&settings);
    let len = curves.a.len();
    assert!(len > 0);
    for (_, curve) in curves.iter() {
        assert_eq!(curve.len(), len);
        for pair in curve.samples().windows(2) {
            assert!(pair[1].operating_time < pair[0].operating_time);
        }
    }
    // larger TMS means slower curve at every multiple
    for ((a, b), c) in curves.a.iter().zip(curves.b.iter()).zip(curves.c.iter()) {
        assert!(a.operating_time < b.operating_time);
        assert!(b.operating_time < c.operating_time);
    }
}

#[test]
fn recompute_isolates_degenerate_relays() {
    let settings = RelaySettings::new(
        RelayConfig::new(100.0, 0.2),
        RelayConfig::new(0.0, 0.3),
        RelayConfig::new(150.0, -1.0),
    );
    assert!(settings.b.is_degenerate());
    let curves = recompute(&settings);
    assert!(!curves.a.is_empty());
    assert!(curves.b.is_empty());
    assert!(curves.c.is_empty());
}

#[test]
fn lenient_parsing_follows_leading_number() {
    assert_eq!(normalize_param(Some("100")), 100.0);
    assert_eq!(normalize_param(Some("  0.2 ")), 0.2);
    assert_eq!(normalize_param(Some("12kA")), 12.0);
    assert_eq!(normalize_param(Some(".5")), 0.5);
    assert_eq!(normalize_param(Some("1e2")), 100.0);
    assert_eq!(normalize_param(Some("-3")), -3.0);
    assert_eq!(normalize_param(Some("")), 0.0);
    assert_eq!(normalize_param(Some("abc")), 0.0);
    assert_eq!(normalize_param(Some("Infinity")), 0.0);
    assert_eq!(normalize_param(Some("1e999")), 0.0);
    assert_eq!(normalize_param(None), 0.0);
}

#[test]
fn strict_parsing_reports_why() {
    assert_eq!(parse_strict("0.25"), Ok(0.25));
    assert_eq!(parse_strict("   "), Err(ParseError::Empty));
    assert_eq!(
        parse_strict("12kA"),
        Err(ParseError::NotANumber("12kA".to_string()))
    );
    assert_eq!(
        parse_strict("inf"),
        Err(ParseError::NonFinite("inf".to_string()))
    );
    assert_eq!(parse_leading("12kA"), Ok(12.0));
}

#[test]
fn source_reads_missing_fields_as_zero() {
    let src = source(&[("IsA", "100"), ("TMSA", "0.2"), ("IsB", "oops")]);
    let settings = src.read_settings();
    assert_eq!(settings.a, RelayConfig::new(100.0, 0.2));
    assert_eq!(settings.b, RelayConfig::new(0.0, 0.0));
    assert_eq!(settings.c, RelayConfig::new(0.0, 0.0));
}

#[test]
fn settings_act_as_their_own_source() {
    let seeded = RelaySettings::seeded();
    assert_eq!(seeded.read_settings(), seeded);
}

#[test]
fn controller_publishes_one_full_set_per_change() {
    let mut controller = RecomputeController::new(RecordingSurface::default());
    let mut src = seeded_source();

    controller.on_parameter_changed(&src);
    src.insert(ParamField::from_id("TMSB").unwrap(), "0.6".to_string());
    let used = controller.on_parameter_changed(&src);

    assert_eq!(used.b.time_multiplier, 0.6);
    assert_eq!(controller.cycles(), 2);
    let published = &controller.surface().published;
    assert_eq!(published.len(), 2);
    // untouched relays are regenerated identically, edited one is replaced
    assert_eq!(published[0].a, published[1].a);
    assert_eq!(published[0].c, published[1].c);
    assert_ne!(published[0].b, published[1].b);
    for set in published {
        assert!(!set.a.is_empty() && !set.b.is_empty() && !set.c.is_empty());
    }
}

#[test]
fn controller_reads_fresh_values_each_cycle() {
    let mut controller = RecomputeController::new(RecordingSurface::default());
    let mut src = seeded_source();
    controller.on_parameter_changed(&src);
    src.insert(ParamField::from_id("IsA").unwrap(), "".to_string());
    controller.on_parameter_changed(&src);

    let last = controller.into_surface().published.pop().unwrap();
    assert!(last.a.is_empty());
    assert!(!last.b.is_empty());
}

#[test]
fn controller_uses_its_range() {
    let range = SampleRange::new(2.0, 4.0, 1.0).unwrap();
    let mut controller = RecomputeController::with_range(RecordingSurface::default(), range);
    controller.apply(&RelaySettings::seeded());
    let set = &controller.surface().published[0];
    let multiples: Vec<f64> = set.a.iter().map(|s| s.multiple).collect();
    assert_eq!(multiples, vec![2.0, 3.0, 4.0]);
}

#[test]
fn shared_surface_sees_controller_output() {
    let surface = Rc::new(RefCell::new(RecordingSurface::default()));
    let mut controller = RecomputeController::new(surface.clone());
    controller.apply(&RelaySettings::seeded());
    assert_eq!(surface.borrow().published.len(), 1);
}

#[test]
fn notifier_drives_controller() {
    let surface = Rc::new(RefCell::new(RecordingSurface::default()));
    let controller = Rc::new(RefCell::new(RecomputeController::new(surface.clone())));
    let src = Rc::new(RefCell::new(seeded_source()));

    let mut notifier = ChangeNotifier::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = seen.clone();
        notifier.subscribe(move |field| seen.borrow_mut().push(field.id()));
    }
    {
        let controller = controller.clone();
        let src = src.clone();
        notifier.subscribe(move |_| {
            controller.borrow_mut().on_parameter_changed(&*src.borrow());
        });
    }
    assert_eq!(notifier.len(), 2);

    let tmsc = ParamField::from_id("TMSC").unwrap();
    src.borrow_mut().insert(tmsc, "0".to_string());
    notifier.notify(tmsc);

    assert_eq!(*seen.borrow(), vec!["TMSC"]);
    let published = &surface.borrow().published;
    assert_eq!(published.len(), 1);
    assert!(published[0].c.is_empty());
    assert!(!published[0].a.is_empty());
}

#[test]
fn unsubscribed_handlers_stop_receiving() {
    let count = Rc::new(RefCell::new(0));
    let mut notifier = ChangeNotifier::new();
    let id = {
        let count = count.clone();
        notifier.subscribe(move |_| *count.borrow_mut() += 1)
    };
    let field = RelaySlot::A.pickup_field();
    notifier.notify(field);
    assert!(notifier.unsubscribe(id));
    assert!(!notifier.unsubscribe(id));
    notifier.notify(field);
    assert_eq!(*count.borrow(), 1);
    assert!(notifier.is_empty());
}
