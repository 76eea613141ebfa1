use fadecue::{CueSheet, FadeTiming, Tick};

#[test]
fn json_fixture_validates() {
    let s = include_str!("data/credits.json");
    let sheet = CueSheet::from_reader(s.as_bytes()).unwrap();
    sheet.validate().unwrap();
    assert_eq!(sheet.entry_count(), 7);
    assert_eq!(sheet.timing().unwrap(), FadeTiming::default());
}

#[test]
fn json_fixture_plays_end_to_end() {
    let s = include_str!("data/credits.json");
    let mut seq = CueSheet::from_reader(s.as_bytes())
        .unwrap()
        .into_sequencer()
        .unwrap();

    // Opening and closing entries are uncaptioned logos.
    assert_eq!(seq.current().unwrap().header, "");

    let mut headers = Vec::new();
    loop {
        headers.push(seq.current().unwrap().header.to_owned());
        // One whole entry per tick: 1 + 1 + 5 + 1 seconds.
        match seq.tick(8.0) {
            Tick::Active => {}
            Tick::Complete => break,
            Tick::Terminal => panic!("terminal before completion"),
        }
    }

    assert_eq!(
        headers,
        vec!["", "Code", "Art", "Story", "Music", "Thanks", ""]
    );
    assert!(seq.is_terminal());
}

#[test]
fn multi_line_entries_join_with_newlines() {
    let s = include_str!("data/credits.json");
    let mut seq = CueSheet::from_reader(s.as_bytes())
        .unwrap()
        .into_sequencer()
        .unwrap();

    seq.tick(8.0);
    let d = seq.current().unwrap();
    assert_eq!(d.header, "Code");
    assert_eq!(d.item.text(), "Ada Byrne\nNadia Kovac\nSun-Hi Park");
}
