
use crate::{
    compose::compose,
    error::PredictionError,
    infer::{
        ClassType, DictionaryPolicy, Placeholder, PredictOptions, Prediction, Segment, Template,
        TypeTruthiness, Widened, predict, predict_with,
    },
    value::ClassValue,
};

// ---- helpers -----------------------------------------------------------

fn text(s: &str) -> ClassType {
    ClassType::text(s)
}

fn widened(w: Widened) -> ClassType {
    ClassType::Widened(w)
}

fn literal(s: &str) -> Prediction {
    Prediction::Literal(s.to_string())
}

fn template(segments: Vec<Segment>) -> Prediction {
    Prediction::Template(Template::from_segments(segments))
}

fn seg(s: &str) -> Segment {
    Segment::Text(s.to_string())
}

// ---- literal scenarios -------------------------------------------------

#[test]
fn strings_and_numbers_predict_literals() {
    assert_eq!(predict(&[text("foo"), text("100")]), literal("foo 100"));
    assert_eq!(predict(&[text("foo"), ClassType::number(100.0)]), literal("foo 100"));
}

#[test]
fn boolean_literals_never_render() {
    let prediction = predict(&[text("foo-bar"), text("barfoo"), ClassType::bool(true)]);

    assert_eq!(prediction, literal("foo-bar barfoo"));
}

#[test]
fn nested_sequences_flatten_and_exclude_falsy() {
    let input = [
        text("To"),
        ClassType::sequence([
            ClassType::number(f64::INFINITY),
            ClassType::sequence([
                text("and"),
                ClassType::sequence([
                    text(""),
                    text("beyond"),
                    ClassType::sequence([ClassType::number(0.0), text("!")]),
                ]),
            ]),
        ]),
    ];

    assert_eq!(predict(&input), literal("To Infinity and beyond !"));
}

#[test]
fn dictionary_keys_keep_declared_order() {
    let dict = ClassType::dictionary([
        ("foo-bar", ClassType::bool(true)),
        ("skip", ClassType::number(0.0)),
        ("barfoo", ClassType::bool(true)),
    ]);

    assert_eq!(predict(&[dict]), literal("foo-bar barfoo"));
}

#[test]
fn empty_nested_sequence_predicts_empty_literal() {
    let input = [ClassType::sequence([ClassType::sequence([])])];

    assert_eq!(predict(&input), literal(""));
}

#[test]
fn empty_tuple_falls_back() {
    assert_eq!(predict(&[]), Prediction::Fallback);
    assert_eq!(compose(&[]), "");
}

#[test]
fn special_number_literals_keep_their_spelling() {
    let input = [
        ClassType::number(f64::NAN),
        ClassType::number(f64::NEG_INFINITY),
        ClassType::bigint(-12),
    ];

    assert_eq!(predict(&input), literal("NaN -Infinity -12"));
}

#[test]
fn never_and_falsy_optionals_are_excluded() {
    let input = [
        text("a"),
        ClassType::Never,
        ClassType::optional(ClassType::null()),
        ClassType::optional(ClassType::Never),
        text("b"),
    ];

    assert_eq!(predict(&input), literal("a b"));
}

#[test]
fn empty_dictionary_keys_never_produce_tokens() {
    let dict = ClassType::dictionary([("", ClassType::bool(true)), ("x", ClassType::bool(true))]);

    assert_eq!(predict(&[dict]), literal("x"));
}

// ---- widened -----------------------------------------------------------

#[test]
fn widened_number_becomes_a_hole() {
    let prediction = predict(&[text("foo"), widened(Widened::Number)]);

    assert_eq!(
        prediction,
        template(vec![seg("foo "), Segment::Hole(Placeholder::Number)])
    );
    assert_eq!(prediction.to_string(), "`foo ${number}`");
}

#[test]
fn widened_string_alone_is_a_bare_hole() {
    let prediction = predict(&[widened(Widened::Text)]);

    assert_eq!(prediction, template(vec![Segment::Hole(Placeholder::String)]));
    assert_eq!(prediction.to_string(), "`${string}`");
}

#[test]
fn widened_boolean_renders_nothing() {
    let prediction = predict(&[text("a"), widened(Widened::Bool), widened(Widened::BigInt)]);

    assert_eq!(
        prediction,
        template(vec![seg("a "), Segment::Hole(Placeholder::BigInt)])
    );
}

#[test]
fn nan_runtime_conforms_to_widened_number() {
    let prediction = predict(&[text("not-a"), widened(Widened::Number)]);
    let actual = compose(&[ClassValue::from("not-a"), ClassValue::Number(f64::NAN)]);

    assert_eq!(actual, "not-a NaN");
    assert!(prediction.matches(&actual));
    assert_eq!(prediction.check(&actual), Ok(()));
}

#[test]
fn widened_boolean_dictionary_values_count_as_present() {
    let dict = ClassType::dictionary([
        ("text-white", widened(Widened::Bool)),
        ("text-black", widened(Widened::Bool)),
    ]);

    // Known quirk kept under the default policy: at runtime only one of
    // the two keys survives, so neither runtime string passes `check`.
    let prediction = predict(&[dict.clone()]);
    assert_eq!(prediction, literal("text-white text-black"));
    assert!(!prediction.matches("text-white"));

    let strict = PredictOptions::new().with_dictionary_policy(DictionaryPolicy::Strict);
    assert_eq!(predict_with(&[dict], &strict), literal(""));
}

#[test]
fn unprovable_dictionary_values_are_excluded() {
    let dict = ClassType::dictionary([
        ("maybe", ClassType::optional(ClassType::bool(true))),
        ("what", ClassType::Unknown),
        ("yes", ClassType::sequence([])),
    ]);

    assert_eq!(predict(&[dict]), literal("yes"));
}

// ---- validity gate -----------------------------------------------------

#[test]
fn unanalysable_positions_fall_back() {
    for shape in [
        ClassType::Unknown,
        ClassType::Any,
        ClassType::sequence([text("a"), ClassType::sequence([ClassType::Any])]),
        ClassType::union([text("x"), ClassType::Unknown]),
        ClassType::optional(ClassType::Any),
    ] {
        assert_eq!(predict(&[text("a"), shape.clone()]), Prediction::Fallback, "{shape:?}");
    }
}

#[test]
fn opaque_values_lift_to_unknown() {
    assert_eq!(ClassType::of(&ClassValue::Opaque), ClassType::Unknown);
    assert_eq!(predict(&[ClassType::of(&ClassValue::Opaque)]), Prediction::Fallback);
}

// ---- unions ----------------------------------------------------------

#[test]
fn optional_position_predicts_with_and_without_it() {
    let prediction = predict(&[text("a"), ClassType::optional(text("x"))]);

    assert_eq!(prediction, Prediction::Union(vec![literal("a x"), literal("a")]));
    assert_eq!(prediction.to_string(), r#""a x" | "a""#);
    assert!(prediction.matches("a"));
    assert!(prediction.matches("a x"));
    assert!(!prediction.matches("x"));
}

#[test]
fn union_with_nullish_member_includes_empty_literal() {
    let shape = ClassType::union([text("foo"), ClassType::undefined()]);

    assert_eq!(
        predict(&[shape]),
        Prediction::Union(vec![literal("foo"), literal("")])
    );
}

#[test]
fn indexed_union_predicts_each_member() {
    let prediction = predict(&[
        text("w-1/2"),
        text("h-full"),
        ClassType::union([text("bg-white"), text("bg-black")]),
    ]);

    assert_eq!(
        prediction,
        Prediction::Union(vec![
            literal("w-1/2 h-full bg-white"),
            literal("w-1/2 h-full bg-black"),
        ])
    );
}

#[test]
fn unions_inside_sequences_distribute() {
    let prediction = predict(&[
        ClassType::sequence([ClassType::union([text("a"), text("b")])]),
        ClassType::union([text("c"), widened(Widened::Number)]),
    ]);

    assert_eq!(
        prediction,
        Prediction::Union(vec![
            literal("a c"),
            template(vec![seg("a "), Segment::Hole(Placeholder::Number)]),
            literal("b c"),
            template(vec![seg("b "), Segment::Hole(Placeholder::Number)]),
        ])
    );
    assert!(prediction.matches("b 12"));
    assert!(!prediction.matches("c"));
}

#[test]
fn equal_member_predictions_collapse() {
    let prediction = predict(&[
        text("a"),
        ClassType::union([ClassType::null(), ClassType::bool(false), ClassType::Never]),
    ]);

    assert_eq!(prediction, literal("a"));
    assert_eq!(predict(&[ClassType::union([])]), literal(""));
}

#[test]
fn too_many_combinations_fall_back() {
    let pair = ClassType::union([text("a"), text("b")]);
    let positions = vec![pair; 7];

    assert_eq!(predict(&positions), Prediction::Fallback);
    assert!(!predict(&positions[..6]).is_fallback());
}

#[test]
fn union_dictionary_values_follow_truthiness() {
    let dict = ClassType::dictionary([
        ("both", ClassType::union([text("x"), ClassType::number(1.0)])),
        ("mixed", ClassType::union([widened(Widened::Text), text("y")])),
        ("maybe", ClassType::union([text("x"), ClassType::null()])),
    ]);

    assert_eq!(predict(&[dict.clone()]), literal("both mixed"));

    let strict = PredictOptions::new().with_dictionary_policy(DictionaryPolicy::Strict);
    assert_eq!(predict_with(&[dict], &strict), literal("both"));
}

#[test]
fn union_predictions_serialize() {
    let prediction = predict(&[ClassType::optional(text("a"))]);
    let json = serde_json::to_string(&prediction).expect("serialize");

    assert_eq!(json, r#"{"union":[{"literal":"a"},{"literal":""}]}"#);
    assert!(prediction.clone().into_literal().is_err());
}

// ---- truthiness --------------------------------------------------------

#[test]
fn truthiness_classifies_every_shape() {
    let cases = [
        (text("a"), TypeTruthiness::Truthy),
        (text(""), TypeTruthiness::Falsy),
        (ClassType::number(-0.0), TypeTruthiness::Falsy),
        (ClassType::number(f64::NAN), TypeTruthiness::Truthy),
        (ClassType::bigint(0), TypeTruthiness::Falsy),
        (ClassType::unit(), TypeTruthiness::Falsy),
        (ClassType::undefined(), TypeTruthiness::Falsy),
        (ClassType::sequence([]), TypeTruthiness::Truthy),
        (ClassType::dictionary::<&str>([]), TypeTruthiness::Truthy),
        (widened(Widened::Bool), TypeTruthiness::Widened),
        (ClassType::Never, TypeTruthiness::Falsy),
        (ClassType::optional(text("a")), TypeTruthiness::Unprovable),
        (ClassType::optional(ClassType::null()), TypeTruthiness::Falsy),
        (ClassType::union([text("a"), ClassType::number(2.0)]), TypeTruthiness::Truthy),
        (ClassType::union([text(""), ClassType::null()]), TypeTruthiness::Falsy),
        (ClassType::union([text("a"), widened(Widened::Bool)]), TypeTruthiness::Widened),
        (ClassType::union([text("a"), ClassType::null()]), TypeTruthiness::Unprovable),
        (ClassType::union([]), TypeTruthiness::Falsy),
        (ClassType::Unknown, TypeTruthiness::Unprovable),
        (ClassType::Any, TypeTruthiness::Unprovable),
    ];

    for (shape, expected) in cases {
        assert_eq!(shape.truthiness(), expected, "{shape:?}");
    }
}

#[test]
fn is_literal_requires_every_position_known() {
    assert!(ClassType::sequence([text("a"), ClassType::bool(false)]).is_literal());
    assert!(!ClassType::sequence([text("a"), widened(Widened::Text)]).is_literal());
    assert!(!ClassType::dictionary([("a", ClassType::Unknown)]).is_literal());
}

// ---- prediction helpers ------------------------------------------------

#[test]
fn display_renders_each_form() {
    assert_eq!(literal("a b").to_string(), "\"a b\"");
    assert_eq!(Prediction::Fallback.to_string(), "string");
    assert_eq!(
        template(vec![seg("w-`$"), Segment::Hole(Placeholder::BigInt)]).to_string(),
        "`w-\\`\\$${bigint}`"
    );
}

#[test]
fn template_segments_merge_and_collapse() {
    let built = Template::from_segments([seg("a"), seg(""), seg(" b")]);
    assert_eq!(built.segments(), &[seg("a b")]);
    assert_eq!(Prediction::from_template(built), literal("a b"));
}

#[test]
fn template_matching_backtracks() {
    let prediction = template(vec![
        seg("p-"),
        Segment::Hole(Placeholder::Number),
        seg(" m-"),
        Segment::Hole(Placeholder::BigInt),
        seg(" "),
        Segment::Hole(Placeholder::String),
    ]);

    assert!(prediction.matches("p-1.5 m--3 anything goes"));
    assert!(prediction.matches("p-Infinity m-0 "));
    assert!(prediction.matches("p-1e+21 m-7 x"));
    assert!(!prediction.matches("p-x m-1 y"));
    assert!(!prediction.matches("p-1 m-1.5 y"));
    assert!(!prediction.matches("p-1 m-"));
}

#[test]
fn template_matching_rejects_long_near_misses() {
    let mut segments = Vec::new();
    for _ in 0..12 {
        segments.push(Segment::Hole(Placeholder::String));
        segments.push(seg(" "));
    }
    segments.push(seg("z"));
    let prediction = template(segments);

    assert!(!prediction.matches(&" ".repeat(40)));
    assert!(prediction.matches(&format!("{}z", " ".repeat(40))));
    assert!(prediction.matches(&format!("{}z", "a ".repeat(12))));
    assert!(!prediction.matches(&format!("{}z", "a ".repeat(11))));
}

#[test]
fn template_matching_respects_char_boundaries() {
    let prediction = template(vec![Segment::Hole(Placeholder::String), seg("é")]);

    assert!(prediction.matches("ééé"));
    assert!(!prediction.matches("ée"));
}

#[test]
fn fallback_matches_everything() {
    assert!(Prediction::Fallback.matches(""));
    assert!(Prediction::Fallback.matches("anything at all"));
}

#[test]
fn check_reports_mismatches() {
    let err = literal("a").check("b").expect_err("mismatch");

    assert_eq!(
        err,
        PredictionError::Mismatch {
            predicted: "\"a\"".to_string(),
            actual: "b".to_string(),
        }
    );
}

#[test]
fn into_literal_rejects_templates_and_fallback() {
    assert_eq!(literal("x").into_literal(), Ok("x".to_string()));
    assert_eq!(
        Prediction::Fallback.into_literal(),
        Err(PredictionError::NotLiteral {
            predicted: "string".to_string(),
        })
    );
    assert!(predict(&[widened(Widened::Number)]).into_literal().is_err());
}

#[test]
fn options_and_predictions_serialize() {
    let options: PredictOptions =
        serde_json::from_str(r#"{"dictionary_policy":"strict"}"#).expect("valid options");
    assert_eq!(options.dictionary_policy, DictionaryPolicy::Strict);
    assert_eq!(
        serde_json::from_str::<PredictOptions>("{}").expect("defaults"),
        PredictOptions::default()
    );

    let prediction = predict(&[text("a"), widened(Widened::Number)]);
    let json = serde_json::to_string(&prediction).expect("serialize");
    assert_eq!(json, r#"{"template":[{"text":"a "},{"hole":"number"}]}"#);
    let back: Prediction = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, prediction);
}
