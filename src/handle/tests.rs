use super::*;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

fn apples() -> Value {
    Value {
        zero: "No apples".into(),
        one: "1 apple".into(),
        few: "{{.Count}} apples".into(),
        many: "Many apples".into(),
        other: "{{.Fart}} other apples".into(),
    }
}

fn collector() -> (
    Arc<Mutex<Vec<Diagnostic>>>,
    impl Fn(&Diagnostic) + Send + Sync,
) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = {
        let seen = Arc::clone(&seen);
        move |d: &Diagnostic| seen.lock().unwrap().push(d.clone())
    };
    (seen, sink)
}

#[test]
fn test_defaults_to_one_bucket() {
    let v = apples();
    let t = T::new(Cow::Borrowed(&v), None);
    assert_eq!(t.plurality(), Plurality::One);
    assert_eq!(t.render(), "1 apple");
    assert_eq!(t.to_string(), "1 apple");
}

#[test]
fn test_plural_zero_and_one() {
    let v = apples();
    let t = T::new(Cow::Borrowed(&v), None);
    let zero = t.clone().plural(0, 10);
    assert_eq!(zero.plurality(), Plurality::Zero);
    assert_eq!(zero.count(), 0);
    assert_eq!(zero.render(), "No apples");

    let one = t.plural(1, 10);
    assert_eq!(one.plurality(), Plurality::One);
    assert_eq!(one.count(), 1);
    assert_eq!(one.render(), "1 apple");
}

#[test]
fn test_plural_few_renders_count() {
    let v = apples();
    let t = T::new(Cow::Borrowed(&v), None).plural(3, 10);
    assert_eq!(t.plurality(), Plurality::Few);
    assert_eq!(t.count(), 3);
    assert_eq!(t.render(), "3 apples");
}

#[test]
fn test_plural_many_is_verbatim() {
    let v = apples();
    let t = T::new(Cow::Borrowed(&v), None).plural(11, 10);
    assert_eq!(t.plurality(), Plurality::Many);
    assert_eq!(t.render(), "Many apples");
    let at_threshold = T::new(Cow::Borrowed(&v), None).plural(10, 10);
    assert_eq!(at_threshold.plurality(), Plurality::Many);
}

#[test]
fn test_plural_many_keeps_previous_count() {
    let v = apples();
    let t = T::new(Cow::Borrowed(&v), None).plural(4, 10).plural(50, 10);
    assert_eq!(t.plurality(), Plurality::Many);
    assert_eq!(t.count(), 4);
}

#[test]
fn test_many_threshold_below_two_never_picks_few() {
    let v = apples();
    let t = T::new(Cow::Borrowed(&v), None).plural(2, 2);
    assert_eq!(t.plurality(), Plurality::Many);
    let t = T::new(Cow::Borrowed(&v), None).plural(1, 0);
    assert_eq!(t.plurality(), Plurality::One);
}

#[test]
fn test_zero_resets_count() {
    let v = apples();
    let t = T::new(Cow::Borrowed(&v), None).plural(5, 10).zero();
    assert_eq!(t.plurality(), Plurality::Zero);
    assert_eq!(t.count(), 0);
}

#[test]
fn test_other_keeps_count() {
    let v = apples();
    let t = T::new(Cow::Borrowed(&v), None).plural(5, 10).other();
    assert_eq!(t.plurality(), Plurality::Other);
    assert_eq!(t.count(), 5);
}

#[test]
fn test_with_then_other() {
    let v = apples();
    let data = HashMap::from([("Fart", "fart")]);
    let t = T::new(Cow::Borrowed(&v), None).with(&data).other();
    assert_eq!(t.render(), "fart other apples");
}

#[test]
fn test_with_on_plain_bucket_is_unchanged() {
    let v = apples();
    let t = T::new(Cow::Borrowed(&v), None).with(&json!({"Hello": "World"}));
    assert_eq!(t.render(), "1 apple");
}

#[test]
fn test_with_replaces_previous_data() {
    let v = apples();
    let t = T::new(Cow::Borrowed(&v), None)
        .with(&json!({"Fart": "first"}))
        .with(&json!({"Fart": "second"}))
        .other();
    assert_eq!(t.render(), "second other apples");
}

#[test]
fn test_with_struct_data() {
    #[derive(Serialize)]
    struct Greeting<'s> {
        #[serde(rename = "Fart")]
        fart: &'s str,
    }
    let v = apples();
    let t = T::new(Cow::Borrowed(&v), None)
        .with(&Greeting { fart: "struct" })
        .other();
    assert_eq!(t.render(), "struct other apples");
}

#[test]
fn test_few_merges_attached_data() {
    let v = Value {
        few: "{{.Count}} {{.Fruit}}".into(),
        ..Default::default()
    };
    let t = T::new(Cow::Borrowed(&v), None)
        .with(&json!({"Fruit": "pears"}))
        .plural(4, 10);
    assert_eq!(t.render(), "4 pears");
}

#[test]
fn test_few_attached_count_wins() {
    let v = Value {
        few: "{{.Count}}".into(),
        ..Default::default()
    };
    let t = T::new(Cow::Borrowed(&v), None)
        .with(&json!({"Count": "several"}))
        .plural(4, 10);
    assert_eq!(t.render(), "several");
}

#[test]
fn test_few_ignores_non_object_data() {
    let v = apples();
    let t = T::new(Cow::Borrowed(&v), None).with(&7).plural(2, 10);
    assert_eq!(t.render(), "2 apples");
}

#[test]
fn test_handles_are_independent_values() {
    let v = apples();
    let base = T::new(Cow::Borrowed(&v), None).with(&json!({"Fart": "shared"}));
    let few = base.clone().plural(3, 10);
    let other = base.clone().other();
    assert_eq!(base.render(), "1 apple");
    assert_eq!(few.render(), "3 apples");
    assert_eq!(other.render(), "shared other apples");
}

#[test]
fn test_missing_field_is_reported_not_fatal() {
    let v = apples();
    let (seen, sink) = collector();
    let t = T::new(Cow::Borrowed(&v), Some(&sink)).with(&json!({})).other();
    assert_eq!(t.render(), " other apples");
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(
        seen[0],
        Diagnostic::TemplateExecute {
            template: "{{.Fart}} other apples".into(),
            reason: "map has no entry for key .Fart".into(),
        }
    );
}

#[test]
fn test_malformed_few_is_reported() {
    let v = Value {
        few: "{{.Count apples".into(),
        ..Default::default()
    };
    let (seen, sink) = collector();
    let t = T::new(Cow::Borrowed(&v), Some(&sink)).plural(3, 10);
    assert_eq!(t.render(), "{{.Count apples");
    assert_eq!(seen.lock().unwrap()[0].kind(), "template_parse");
}

#[test]
fn test_unserializable_data_is_reported() {
    let v = apples();
    let (seen, sink) = collector();
    let bad: BTreeMap<Vec<u8>, u8> = BTreeMap::from([(vec![1], 1)]);
    let t = T::new(Cow::Borrowed(&v), Some(&sink))
        .with(&json!({"Fart": "kept?"}))
        .with(&bad);
    assert!(t.data().is_none());
    assert_eq!(t.render(), "1 apple");
    assert_eq!(seen.lock().unwrap()[0].kind(), "invalid_data");
}

#[test]
fn test_no_sink_is_silent() {
    let v = apples();
    let t = T::new(Cow::Borrowed(&v), None).with(&json!({})).other();
    assert_eq!(t.render(), " other apples");
}

#[test]
fn test_debug_omits_sink() {
    let v = apples();
    let (_seen, sink) = collector();
    let t = T::new(Cow::Borrowed(&v), Some(&sink));
    let dbg = format!("{t:?}");
    assert!(dbg.contains("plural: One"));
    assert!(dbg.contains("log: true"));
}
