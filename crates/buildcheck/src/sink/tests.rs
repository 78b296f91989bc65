use super::*;

#[test]
fn buffer_sink_appends_newline() {
    let sink = BufferSink::new();
    sink.report_line("hello");
    assert_eq!(sink.get_output(), "hello\n");
    assert_eq!(sink.lines_reported(), 1);
}

#[test]
fn buffer_sink_keeps_order() {
    let sink = buffer_sink();
    sink.report_line("first");
    sink.report_line("second");
    assert_eq!(sink.get_output(), "first\nsecond\n");
    assert_eq!(sink.lines_reported(), 2);
}

#[test]
fn buffer_sink_clear_resets_output_and_count() {
    let sink = buffer_sink();
    sink.report_line("hello");
    sink.clear();
    assert!(sink.get_output().is_empty());
    assert_eq!(sink.lines_reported(), 0);
}

#[test]
fn silent_sink_discards_text_but_counts() {
    let sink = silent_sink();
    sink.report_line("hello");
    sink.report_line("world");
    assert_eq!(sink.get_output(), "");
    assert_eq!(sink.lines_reported(), 2);
    sink.clear();
    assert_eq!(sink.lines_reported(), 0);
}

#[test]
fn stderr_sink_counts_without_capturing() {
    let sink = stderr_sink();
    sink.report_line("stderr sink test line");
    assert_eq!(sink.get_output(), "");
    assert_eq!(sink.lines_reported(), 1);
}

#[test]
fn shared_handles_see_the_same_buffer() {
    let sink = buffer_sink();
    let other = Arc::clone(&sink);
    other.report_line("via clone");
    assert_eq!(sink.get_output(), "via clone\n");
}
