use chrono::{DateTime, TimeZone, Utc};
use redirstat_core::{CounterRecord, StatsTree};

fn t1() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2008, 5, 1, 12, 0, 0).unwrap()
}

fn t2() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2008, 5, 2, 0, 30, 0).unwrap()
}

fn sample_record() -> CounterRecord {
    CounterRecord {
        project: "openSUSE".to_string(),
        package: "foo".to_string(),
        repository: "standard".to_string(),
        arch: "x86_64".to_string(),
        count: 5,
        filename: "foo.rpm".to_string(),
        filetype: "rpm".to_string(),
        version: "1.0".to_string(),
        release: "1".to_string(),
        created_at: t1(),
        counted_at: t2(),
    }
}

#[test]
fn single_row_scenario() {
    let tree = StatsTree::from_records(vec![sample_record()]);

    let expected = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<redirect_stats>
  <project name=\"openSUSE\">
    <package name=\"foo\">
      <repository name=\"standard\">
        <arch name=\"x86_64\">
          <count filename=\"foo.rpm\" filetype=\"rpm\" version=\"1.0\" release=\"1\" \
created_at=\"2008-05-01T12:00:00Z\" counted_at=\"2008-05-02T00:30:00Z\">5</count>
        </arch>
      </repository>
    </package>
  </project>
</redirect_stats>
";

    assert_eq!(tree.to_xml(), expected);
}

#[test]
fn empty_input_serializes_to_empty_root() {
    let tree = StatsTree::from_records(Vec::new());
    assert_eq!(
        tree.to_xml(),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<redirect_stats/>\n"
    );
}

#[test]
fn leaf_count_equals_input_row_count() {
    let mut records = Vec::new();
    for i in 0..7 {
        let mut r = sample_record();
        r.package = format!("pkg{}", i % 3);
        r.arch = if i % 2 == 0 { "x86_64" } else { "i586" }.to_string();
        records.push(r);
    }

    let tree = StatsTree::from_records(records.clone());
    let xml = tree.to_xml();

    assert_eq!(xml.matches("<count ").count(), records.len());
    assert_eq!(tree.record_count(), records.len());
}

#[test]
fn serialization_is_deterministic() {
    let records = vec![
        {
            let mut r = sample_record();
            r.project = "zypp".to_string();
            r
        },
        sample_record(),
        {
            let mut r = sample_record();
            r.repository = "debug".to_string();
            r
        },
    ];

    let first = StatsTree::from_records(records.clone()).to_xml();
    let second = StatsTree::from_records(records).to_xml();
    assert_eq!(first, second);
}

#[test]
fn projects_appear_in_lexical_order() {
    let mut a = sample_record();
    a.project = "GNOME".to_string();
    let mut b = sample_record();
    b.project = "Apache".to_string();

    let xml = StatsTree::from_records(vec![a, b]).to_xml();

    let apache = xml.find("<project name=\"Apache\">").unwrap();
    let gnome = xml.find("<project name=\"GNOME\">").unwrap();
    assert!(apache < gnome);
}

#[test]
fn reserved_characters_are_escaped() {
    let mut r = sample_record();
    r.package = "a&b".to_string();
    r.filename = "weird<name>\".rpm".to_string();

    let xml = StatsTree::from_records(vec![r]).to_xml();

    assert!(xml.contains("<package name=\"a&amp;b\">"));
    assert!(xml.contains("filename=\"weird&lt;name&gt;&quot;.rpm\""));
    assert!(!xml.contains("a&b"));
}

#[test]
fn round_trip_preserves_record_set() {
    let records = vec![
        sample_record(),
        {
            let mut r = sample_record();
            r.project = "GNOME".to_string();
            r.package = "nautilus&friends".to_string();
            r.count = 0;
            r
        },
        {
            let mut r = sample_record();
            r.arch = "ppc".to_string();
            r.version = "2.0".to_string();
            r.count = 123;
            r
        },
    ];

    let xml = StatsTree::from_records(records.clone()).to_xml();
    let mut extracted = extract_records(&xml);

    let mut expected = records;
    let key = |r: &CounterRecord| {
        (
            r.project.clone(),
            r.package.clone(),
            r.repository.clone(),
            r.arch.clone(),
            r.filename.clone(),
        )
    };
    extracted.sort_by_key(key);
    expected.sort_by_key(key);
    assert_eq!(extracted, expected);
}

// Minimal reader for the exact document shape this exporter emits, enough
// to check the round-trip property without an XML dependency.
fn extract_records(xml: &str) -> Vec<CounterRecord> {
    let mut records = Vec::new();
    let mut project = String::new();
    let mut package = String::new();
    let mut repository = String::new();
    let mut arch = String::new();

    for line in xml.lines() {
        let line = line.trim_start();
        if let Some(name) = named_element(line, "project") {
            project = name;
        } else if let Some(name) = named_element(line, "package") {
            package = name;
        } else if let Some(name) = named_element(line, "repository") {
            repository = name;
        } else if let Some(name) = named_element(line, "arch") {
            arch = name;
        } else if line.starts_with("<count ") {
            let text = line
                .split_once('>')
                .and_then(|(_, rest)| rest.split_once('<'))
                .map(|(text, _)| text)
                .unwrap();

            records.push(CounterRecord {
                project: project.clone(),
                package: package.clone(),
                repository: repository.clone(),
                arch: arch.clone(),
                count: text.parse().unwrap(),
                filename: attribute(line, "filename"),
                filetype: attribute(line, "filetype"),
                version: attribute(line, "version"),
                release: attribute(line, "release"),
                created_at: attribute(line, "created_at").parse().unwrap(),
                counted_at: attribute(line, "counted_at").parse().unwrap(),
            });
        }
    }

    records
}

fn named_element(line: &str, tag: &str) -> Option<String> {
    line.strip_prefix(&format!("<{} ", tag))
        .map(|_| attribute(line, "name"))
}

fn attribute(line: &str, name: &str) -> String {
    let marker = format!("{}=\"", name);
    let start = line.find(&marker).unwrap() + marker.len();
    let end = line[start..].find('"').unwrap() + start;
    unescape(&line[start..end])
}

fn unescape(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}
