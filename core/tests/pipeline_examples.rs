// core/tests/pipeline_examples.rs
//
// End-to-end vectors through render + compile.

use mcpdict_core::{
    break_at_commas, break_before_brackets, compile, identity, no_break, render, Dialect,
    Displayer, Selector, StyleKind, StyleRange,
};

#[test]
fn bold_header_then_comma() {
    let marked = render(Some("*ABC*,def"), &identity, 0, no_break);
    assert_eq!(marked, "*ABC*, def");
    let styled = compile(&marked);
    assert_eq!(styled.text, "ABC, def");
    assert_eq!(styled.ranges, vec![StyleRange::new(0, 3, StyleKind::Bold)]);
}

#[test]
fn comma_hook_yields_newline_separated_tokens() {
    let seen = std::sync::Mutex::new(Vec::new());
    let record = |t: &str, _: Selector| {
        seen.lock().unwrap().push(t.to_string());
        None::<String>
    };
    let marked = render(Some("a1,b2"), &record, 0, break_at_commas);
    assert_eq!(marked, "a1\nb2");
    assert_eq!(*seen.lock().unwrap(), vec!["a1", "b2"]);
}

#[test]
fn converter_output_compiles_to_full_bold() {
    let forty_two = |t: &str, _: Selector| (t == "42").then(|| "*forty-two*".to_string());
    let marked = render(Some("42"), &forty_two, 0, no_break);
    assert_eq!(marked, "*forty-two*");
    let styled = compile(&marked);
    assert_eq!(styled.text, "forty-two");
    assert_eq!(styled.ranges, vec![StyleRange::new(0, 9, StyleKind::Bold)]);
}

#[test]
fn bracketed_japanese_readings() {
    let kana = |t: &str, _: Selector| match t {
        "ka" => Some("カ".to_string()),
        "ge" => Some("|ゲ|".to_string()),
        _ => None,
    };
    let marked = render(Some("[1]ka[2]ge"), &kana, 0, break_before_brackets);
    assert_eq!(marked, "[1] カ\n[2] |ゲ|");
    let styled = compile(&marked);
    assert_eq!(styled.text, "[1] カ\n[2] ゲ");
    let dim = styled.ranges[0];
    assert_eq!(dim.kind, StyleKind::Dim);
    assert_eq!(styled.slice(&dim), "ゲ");
}

#[test]
fn parentheses_and_brackets_get_wrap_spaces() {
    let marked = render(Some("ka(ko)[x]y,  z"), &identity, 0, no_break);
    assert_eq!(marked, "ka (ko)[x] y, z");
}

#[test]
fn displayers_are_shareable_across_threads() {
    let displayer = Displayer::for_dialect(Dialect::Minnan)
        .with_converter(|t: &str, _: Selector| Some(format!("*{}*", t)));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let d = displayer.clone();
            std::thread::spawn(move || d.styled(Some(format!("a{}", i).as_str()), 0))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let styled = handle.join().unwrap();
        assert_eq!(styled.text, format!("a{}", i));
        assert_eq!(styled.ranges.len(), 1);
    }
}
