use std::fs;

use anyhow::{Context, Result};

use inflection_table_json::inflection_table::{
    parse_inflection_table, parse_inflection_table_with,
    renderer::{flatten_forms, render_xml},
    InflectionError, ParadigmMeta, ParseOptions, TableKind,
};

static HTML_SUFFIX: &str = ".html";
static VERB_SUFFIX: &str = ".verb.html";

fn read_fixture(name: &str) -> Result<String> {
    fs::read_to_string(format!("./tests/{}", name)).with_context(|| format!("fixture {}", name))
}

#[test]
fn test_inflection_table_all() -> Result<()> {
    let paths = fs::read_dir("./tests")?;
    let mut parsed = 0;
    for path in paths {
        let path = path?.path();
        let file_name = path.file_name().unwrap().to_str().unwrap();
        if !file_name.ends_with(HTML_SUFFIX) {
            continue;
        }

        let kind = if file_name.ends_with(VERB_SUFFIX) {
            TableKind::Verb
        } else {
            TableKind::Noun
        };

        let html = fs::read_to_string(&path)?;
        let table = parse_inflection_table_with(&html, kind, &ParseOptions::strict())
            .with_context(|| format!("Failed to parse {}", file_name))?;
        assert!(table.diagnostics.is_empty());

        serde_json::to_string_pretty(&table)?;
        parsed += 1;
    }
    assert!(2 <= parsed);

    Ok(())
}

#[test]
fn test_verb_table() -> Result<()> {
    let html = read_fixture("antaa.verb.html")?;
    let table = parse_inflection_table(&html, TableKind::Verb)?;

    assert_eq!(
        table.meta,
        ParadigmMeta {
            word: "antaa".to_owned(),
            paradigm_class: "53".to_owned(),
            paradigm_exemplar: "muistaa".to_owned(),
            gradation: "t-d".to_owned(),
        }
    );

    let tree = &table.table;
    assert_eq!(
        tree.labels(),
        vec!["indicative_mood", "conditional_mood", "nominal_forms"]
    );

    for mood in &tree.children[..2] {
        assert_eq!(mood.labels(), vec!["present", "perfect"]);
        for tense in &mood.children {
            assert_eq!(tense.labels(), vec!["positive", "negative"]);
            for polarity in &tense.children {
                assert_eq!(polarity.labels(), vec!["singular", "plural", "passive"]);
                assert_eq!(
                    polarity.child("singular").unwrap().labels(),
                    vec!["first", "second", "third"]
                );
                assert_eq!(
                    polarity.child("plural").unwrap().labels(),
                    vec!["first", "second", "third"]
                );

                let passive = polarity.child("passive").unwrap();
                assert!(passive.is_leaf());
                assert!(passive.value.is_some());
            }
        }
    }

    let forms = [
        ("indicative_mood/present/positive/singular/first", "annan"),
        ("indicative_mood/present/negative/singular/second", "et anna"),
        ("indicative_mood/perfect/positive/plural/third", "ovat antaneet"),
        ("indicative_mood/perfect/negative/plural/first", "emme ole antaneet"),
        ("indicative_mood/present/positive/passive", "annetaan"),
        ("indicative_mood/perfect/negative/passive", "ei ole annettu"),
        ("conditional_mood/present/positive/singular/third", "antaisi"),
        ("conditional_mood/present/negative/plural/third", "eivät antaisi"),
        ("conditional_mood/perfect/positive/passive", "olisi annettu"),
    ];
    for (path, value) in forms {
        assert_eq!(tree.value_at(path), Some(value), "{}", path);
    }

    Ok(())
}

#[test]
fn test_verb_nominal_forms() -> Result<()> {
    let html = read_fixture("antaa.verb.html")?;
    let table = parse_inflection_table(&html, TableKind::Verb)?;

    let nominal_forms = table.table.children.last().context("no moods")?;
    assert_eq!(nominal_forms.label, "nominal_forms");

    let forms = [
        ("infinitives/first", "antaa"),
        ("infinitives/long_first", "antaakseen"),
        ("infinitives/second/inessive/active", "antaessa"),
        ("infinitives/second/inessive/passive", "annettaessa"),
        ("infinitives/second/instructive/active", "antaen"),
        ("infinitives/second/instructive/passive", "–"),
        ("infinitives/third/inessive/active", "antamassa"),
        ("infinitives/third/abessive/active", "antamatta"),
        ("infinitives/third/instructive/passive", "annettaman"),
        ("infinitives/fourth/nominative", "antaminen"),
        ("infinitives/fourth/partitive", "antamista"),
        ("infinitives/fifth", "antamaisillaan"),
        ("participles/present/active", "antava"),
        ("participles/present/passive", "annettava"),
        ("participles/past/active", "antanut"),
        ("participles/past/passive", "annettu"),
        ("participles/agent", "antama"),
        ("participles/negative", "antamaton"),
    ];
    for (path, value) in forms {
        assert_eq!(nominal_forms.value_at(path), Some(value), "{}", path);
    }

    assert_eq!(
        nominal_forms.get("infinitives/third").unwrap().labels(),
        vec!["inessive", "elative", "illative", "adessive", "abessive", "instructive"]
    );

    Ok(())
}

#[test]
fn test_noun_table() -> Result<()> {
    let html = read_fixture("talo.noun.html")?;
    let table = parse_inflection_table(&html, TableKind::Noun)?;

    assert_eq!(table.meta.word, "talo");
    assert_eq!(table.meta.paradigm_class, "1");
    assert_eq!(table.meta.paradigm_exemplar, "valo");
    assert_eq!(table.meta.gradation, "no");

    let tree = &table.table;
    assert_eq!(
        tree.labels(),
        vec![
            "nominative",
            "genitive",
            "partitive",
            "illative",
            "accusative",
            "inessive",
            "essive"
        ]
    );

    assert_eq!(tree.value_at("nominative/singular"), Some("talo"));
    assert_eq!(tree.value_at("genitive/singular"), Some("talon"));
    assert_eq!(tree.value_at("genitive/plural"), Some("talojen"));
    assert_eq!(tree.value_at("illative/plural"), Some("taloihin"));
    assert_eq!(tree.value_at("essive/plural"), Some("taloina"));

    let accusative = tree.child("accusative").unwrap();
    assert_eq!(accusative.labels(), vec!["nominative", "genitive"]);
    assert_eq!(accusative.value_at("nominative/singular"), Some("talo"));
    assert_eq!(accusative.value_at("nominative/plural"), Some("talot"));
    assert_eq!(accusative.value_at("genitive"), Some("talon"));

    Ok(())
}

#[test]
fn test_missing_table_leaves_siblings_alone() -> Result<()> {
    let parts = [
        ("Adverb", "<h4>Adverb</h4><p><b>talo</b></p><ol><li>house</li></ol>".to_owned()),
        ("Noun", read_fixture("talo.noun.html")?),
    ];

    let mut tables = Vec::new();
    for (part_of_speech, html) in &parts {
        match parse_inflection_table(html, TableKind::from_part_of_speech(part_of_speech)) {
            Ok(table) => tables.push(table),
            Err(err) if err.is_recoverable() => {
                assert_eq!(err, InflectionError::MissingTable);
            }
            Err(err) => return Err(err.into()),
        }
    }

    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].kind, TableKind::Noun);

    Ok(())
}

#[test]
fn test_malformed_headline() -> Result<()> {
    let html = read_fixture("talo.noun.html")?.replace("Kotus type 1/valo", "type 1/valo");
    let err = parse_inflection_table(&html, TableKind::Noun).unwrap_err();
    assert!(matches!(err, InflectionError::StructuralMismatch(_)));
    assert!(!err.is_recoverable());

    Ok(())
}

#[test]
fn test_truncated_nominal_forms() -> Result<()> {
    let html = read_fixture("antaa.verb.html")?;
    let cut = html.find("<th>5th").context("no fifth infinitive row")?;
    let html = format!("{}</tr></table>", &html[..cut]);

    let err = parse_inflection_table(&html, TableKind::Verb).unwrap_err();
    assert!(matches!(err, InflectionError::MalformedNominalBlock(_)));

    Ok(())
}

#[test]
fn test_document_rendering() -> Result<()> {
    let html = read_fixture("talo.noun.html")?;
    let table = parse_inflection_table(&html, TableKind::Noun)?;

    let document = table.to_document();
    assert_eq!(document.labels(), vec!["meta", "table"]);
    assert_eq!(document.value_at("meta/kotus/type"), Some("1"));
    assert_eq!(document.value_at("table/accusative/genitive"), Some("talon"));

    let xml = render_xml(&document);
    assert!(xml.starts_with("<Inflection_Table>\n  <meta>\n"));
    assert!(xml.contains("      <type>1</type>\n"));

    let forms = flatten_forms(&table.table);
    assert_eq!(forms.len(), 15);
    assert_eq!(forms[0].path, "nominative/singular");
    assert_eq!(forms[0].value, "talo");

    let json: serde_json::Value = serde_json::to_value(&table)?;
    assert_eq!(json["meta"]["paradigmExemplar"], "valo");
    assert_eq!(json["table"]["children"][0]["label"], "nominative");

    Ok(())
}
