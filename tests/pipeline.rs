use std::collections::BTreeMap;
use std::io::Write;

use proptest::prelude::*;
use serde_cbor::Value;

use hcertdec::{
    decode, encode, to_text, ErrorKind, LocalizedFormatter, Presenter, RawAttributes,
    ReferenceData, Zone,
};

// Taken from:
// https://github.com/eu-digital-green-certificates/dgc-testdata/blob/main/IT/2DCode/raw/1.json
// It is licensed under Apache-2.0 License.
const VACCINE_RECORD_DATA: &str = "HC1:6BFOXN%TS3DH0YOJ58S S-W5HDC *M0II5XHC9B5G2+$N IOP-IA%NFQGRJPC%OQHIZC4.OI1RM8ZA.A5:S9MKN4NN3F85QNCY0O%0VZ001HOC9JU0D0HT0HB2PL/IB*09B9LW4T*8+DCMH0LDK2%K:XFE70*LP$V25$0Q:J:4MO1P0%0L0HD+9E/HY+4J6TH48S%4K.GJ2PT3QY:GQ3TE2I+-CPHN6D7LLK*2HG%89UV-0LZ 2ZJJ524-LH/CJTK96L6SR9MU9DHGZ%P WUQRENS431T1XCNCF+47AY0-IFO0500TGPN8F5G.41Q2E4T8ALW.INSV$ 07UV5SR+BNQHNML7 /KD3TU 4V*CAT3ZGLQMI/XI%ZJNSBBXK2:UG%UJMI:TU+MMPZ5$/PMX19UE:-PSR3/$NU44CBE6DQ3D7B0FBOFX0DV2DGMB$YPF62I$60/F$Z2I6IFX21XNI-LM%3/DF/U6Z9FEOJVRLVW6K$UG+BKK57:1+D10%4K83F+1VWD1NE";

fn utc_presenter(reference: ReferenceData) -> Presenter<LocalizedFormatter> {
    let formatter =
        LocalizedFormatter::new("fr_FR", LocalizedFormatter::DEFAULT_PATTERN, Zone::Utc)
            .unwrap();
    Presenter::new(reference, formatter).unwrap()
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn certificate(record: Value) -> RawAttributes {
    let mut name = BTreeMap::new();
    name.insert(text("fn"), text("Martin"));
    name.insert(text("gn"), text("Louise"));

    let mut dcc = BTreeMap::new();
    dcc.insert(text("ver"), text("1.3.0"));
    dcc.insert(text("nam"), Value::Map(name));
    dcc.insert(text("dob"), text("1990-01-01"));
    dcc.insert(text("v"), Value::Array(vec![record]));

    let mut hcert = BTreeMap::new();
    hcert.insert(Value::Integer(1), Value::Map(dcc));

    let mut claims = BTreeMap::new();
    claims.insert(Value::Integer(1), text("FR"));
    claims.insert(Value::Integer(4), Value::Integer(1_654_041_600));
    claims.insert(Value::Integer(6), Value::Integer(1_622_505_600));
    claims.insert(Value::Integer(-260), Value::Map(hcert));
    RawAttributes::new(claims)
}

#[test]
fn renders_italian_vaccination_certificate() {
    let attributes = decode(VACCINE_RECORD_DATA).unwrap();
    let lines = utc_presenter(ReferenceData::default())
        .render(&attributes)
        .unwrap();

    let expected = "\
Émetteur du document : IT
Date d’émission : vendredi 21 mai 2021 à 10h33
Date de fin de validité : mercredi 17 novembre 2021 à 11h33
ID de la clé de signature : OTAXaM3aBRM=

########## Certificat(s) ##########

Version : 1.0.0
Nom : Di Caprio
Prénom : Marilù Teresa
Date de naissance : 1977-06-16
Type de certificat : Vaccination
Maladie ciblée : COVID-19
Type de vaccin : ARNm
Nom du produit : Comirnaty
Fabricant : Biontech Manufacturing GmbH
Nombre de doses injectées : 2
Nombre total de doses requises : 2
Date de la dernière injection : 2021-04-10
Pays : Italie
Autorité de délivrance : IT
Identifiant du certificat : 01ITE7300E1AB2A84C719004F103DCB1F70A#6

##########
";
    assert_eq!(to_text(&lines), expected);
}

#[test]
fn other_prefix_is_unsupported() {
    let err = decode("XY1:anything at all").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
}

#[test]
fn encoded_certificate_renders_country_and_disease() {
    let mut record = BTreeMap::new();
    record.insert(text("tg"), text("840539006"));
    record.insert(text("co"), text("FR"));
    let token = encode(&certificate(Value::Map(record)), Some(&[1u8, 2, 3][..])).unwrap();

    let lines = utc_presenter(ReferenceData::default())
        .render(&decode(&token).unwrap())
        .unwrap();
    let text = to_text(&lines);
    assert!(text.contains("\nMaladie ciblée : COVID-19\n"));
    assert!(text.contains("\nPays : France\n"));
    assert!(text.contains("\nID de la clé de signature : AQID\n"));
}

#[test]
fn reference_data_from_file() {
    let mut reference = ReferenceData::default();
    reference.labels.issuer = "Issuer:".to_string();
    reference
        .tables
        .get_mut("country")
        .unwrap()
        .insert("FR", "France (métropole)");

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(reference.to_json_pretty().unwrap().as_bytes())
        .unwrap();
    let loaded = ReferenceData::from_path(file.path()).unwrap();
    assert_eq!(loaded, reference);

    let mut record = BTreeMap::new();
    record.insert(text("co"), text("FR"));
    let lines = utc_presenter(loaded)
        .render(&certificate(Value::Map(record)))
        .unwrap();
    let text = to_text(&lines);
    assert!(text.starts_with("Issuer: FR\n"));
    assert!(text.contains("\nPays : France (métropole)\n"));
}

#[test]
fn missing_reference_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ReferenceData::from_path(dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

fn claim_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(|n| Value::Integer(n.into())),
        "[a-zA-Z0-9 :/#-]{0,24}".prop_map(Value::Text),
        any::<bool>().prop_map(Value::Bool),
        prop::collection::vec(any::<u8>(), 0..16).prop_map(Value::Bytes),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{2,3}", inner, 0..6).prop_map(|m| {
                Value::Map(m.into_iter().map(|(k, v)| (Value::Text(k), v)).collect())
            }),
        ]
    })
}

fn claim_key() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-300i64..300).prop_map(|n| Value::Integer(n.into())),
        "[a-j]{1,4}".prop_map(Value::Text),
    ]
}

/// A vaccination record holding any subset of schema fields, with codes
/// drawn from the built-in tables.
fn vaccination_record() -> impl Strategy<Value = BTreeMap<Value, Value>> {
    (
        proptest::option::of(Just(text("840539006"))),
        proptest::option::of(prop_oneof![Just(text("1119349007")), Just(text("J07BX03"))]),
        proptest::option::of(prop_oneof![Just(text("EU/1/20/1528")), Just(text("EU/1/21/1529"))]),
        proptest::option::of(prop_oneof![Just(text("FR")), Just(text("DE")), Just(text("IT"))]),
        proptest::option::of((1i64..4).prop_map(|n| Value::Integer(n.into()))),
        proptest::option::of("[A-Z0-9:#]{4,20}".prop_map(Value::Text)),
    )
        .prop_map(|(tg, vp, mp, co, dn, ci)| {
            let mut record = BTreeMap::new();
            for (code, value) in vec![("tg", tg), ("vp", vp), ("mp", mp), ("co", co), ("dn", dn), ("ci", ci)] {
                if let Some(value) = value {
                    record.insert(text(code), value);
                }
            }
            record
        })
}

proptest! {
    /// Encoding then decoding recovers the claims, plus the key identifier.
    #[test]
    fn decode_inverts_encode(
        claims in prop::collection::btree_map(claim_key(), claim_value(), 0..8),
        kid in prop::collection::vec(any::<u8>(), 1..16),
    ) {
        prop_assume!(!claims.contains_key(&text("kid")));
        let attributes = RawAttributes::new(claims);
        let token = encode(&attributes, Some(kid.as_slice())).unwrap();

        let decoded = decode(&token).unwrap();
        prop_assert!(decoded.key_id().is_some());
        prop_assert_eq!(decoded.without_key_id(), attributes);
    }

    /// Rendering the same claims twice yields the same lines.
    #[test]
    fn render_is_deterministic(record in vaccination_record()) {
        let presenter = utc_presenter(ReferenceData::default());
        let attributes = certificate(Value::Map(record));
        let first = presenter.render(&attributes).unwrap();
        let second = presenter.render(&attributes).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Records made only of schema fields with tabled codes always render.
    #[test]
    fn schema_fields_always_render(record in vaccination_record()) {
        let fields = record.len();
        let presenter = utc_presenter(ReferenceData::default());
        let lines = presenter.render(&certificate(Value::Map(record))).unwrap();
        let start = lines
            .iter()
            .position(|l| l.label == "Type de certificat :")
            .unwrap();
        // record lines, then the closing banner
        prop_assert_eq!(lines.len(), start + 1 + fields + 3);
    }

    /// Any line without the prefix is rejected before decoding starts.
    #[test]
    fn prefix_is_checked_first(line in "[^H].*") {
        prop_assert_eq!(decode(&line).unwrap_err().kind(), ErrorKind::UnsupportedFormat);
    }
}
