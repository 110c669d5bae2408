//! Built-in reference data, with French labels.

use super::{
    Banner, DocumentLabels, FieldSpec, LookupTable, ReferenceData, VariantKind,
    VariantSchema,
};

pub(crate) const DISEASE: &str = "disease";
pub(crate) const VACCINE_TYPE: &str = "vaccine-type";
pub(crate) const PRODUCT: &str = "product";
pub(crate) const MANUFACTURER: &str = "manufacturer";
pub(crate) const COUNTRY: &str = "country";
pub(crate) const TEST_TYPE: &str = "test-type";
pub(crate) const TEST_DEVICE: &str = "test-device";
pub(crate) const TEST_RESULT: &str = "test-result";

const DISEASES: &[(&str, &str)] = &[
    ("840539006", "COVID-19"),
];

const VACCINE_TYPES: &[(&str, &str)] = &[
    ("1119305005", "antigénique"),
    ("1119349007", "ARNm"),
    ("J07BX03", "ARNm"),
];

const PRODUCTS: &[(&str, &str)] = &[
    ("EU/1/20/1528", "Comirnaty"),
    ("EU/1/20/1507", "Moderna"),
    ("EU/1/21/1529", "Vaxzevria"),
    ("EU/1/20/1525", "Janssen"),
];

const MANUFACTURERS: &[(&str, &str)] = &[
    ("ORG-100001699", "AstraZeneca AB"),
    ("ORG-100030215", "Biontech Manufacturing GmbH"),
    ("ORG-100001417", "Janssen-Cilag International"),
    ("ORG-100031184", "Moderna Biotech Spain S.L."),
    ("ORG-100006270", "Curevac AG"),
    ("ORG-100013793", "CanSino Biologics"),
    ("ORG-100020693", "China Sinopharm International Corp. (Pékin)"),
    ("ORG-100010771", "Sinopharm Weiqida Europe Pharmaceutical s.r.o. (Prague)"),
    ("ORG-100024420", "Sinopharm Zhijun (Shenzhen) Pharmaceutical Co. Ltd."),
    ("ORG-100032020", "Novavax CZ AS"),
];

const COUNTRIES: &[(&str, &str)] = &[
    ("AD", "Andorre"),
    ("AE", "Émirats arabes unis"),
    ("AF", "Afghanistan"),
    ("AG", "Antigua-et-Barbuda"),
    ("AI", "Anguilla"),
    ("AL", "Albanie"),
    ("AM", "Arménie"),
    ("AO", "Angola"),
    ("AQ", "Antarctique"),
    ("AR", "Argentine"),
    ("AS", "Samoa américaines"),
    ("AT", "Autriche"),
    ("AU", "Australie"),
    ("AW", "Aruba"),
    ("AX", "Îles Åland"),
    ("AZ", "Azerbaïdjan"),
    ("BA", "Bosnie-Herzégovine"),
    ("BB", "Barbade"),
    ("BD", "Bangladesh"),
    ("BE", "Belgique"),
    ("BF", "Burkina Faso"),
    ("BG", "Bulgarie"),
    ("BH", "Bahreïn"),
    ("BI", "Burundi"),
    ("BJ", "Bénin"),
    ("BL", "Saint Barthélemy"),
    ("BM", "Bermudes"),
    ("BN", "Brunéi Darussalam"),
    ("BO", "Bolivie"),
    ("BQ", "Bonaire, Saint Eustache et Saba"),
    ("BR", "Brésil"),
    ("BS", "Bahamas"),
    ("BT", "Bhoutan"),
    ("BV", "Île Bouve"),
    ("BW", "Botswana"),
    ("BY", "Biélorussie"),
    ("BZ", "Belize"),
    ("CA", "Canada"),
    ("CC", "Îles Cocos"),
    ("CD", "République démocratique du Congo"),
    ("CF", "République centrafricaine"),
    ("CG", "Congo"),
    ("CH", "Suisse"),
    ("CI", "Côte d'Ivoire"),
    ("CK", "Îles Cook"),
    ("CL", "Chili"),
    ("CM", "Cameroun"),
    ("CN", "Chine"),
    ("CO", "Colombie"),
    ("CR", "Costa Rica"),
    ("CU", "Cuba"),
    ("CV", "Cabo Verde"),
    ("CW", "Curaçao"),
    ("CX", "Île Christmas"),
    ("CY", "Chypre"),
    ("CZ", "République tchèque"),
    ("DE", "Allemagne"),
    ("DJ", "Djibouti"),
    ("DK", "Danemark"),
    ("DM", "Dominique"),
    ("DO", "République dominicaine"),
    ("DZ", "Algérie"),
    ("EC", "Équateur"),
    ("EE", "Estonie"),
    ("EG", "Égypte"),
    ("EH", "Sahara occidental"),
    ("ER", "Érythrée"),
    ("ES", "Espagne"),
    ("ET", "Éthiopie"),
    ("FI", "Finlande"),
    ("FJ", "Fidji"),
    ("FK", "Îles Falkland (Malouines)"),
    ("FM", "États fédérés de Micronésie"),
    ("FO", "Îles Féroé"),
    ("FR", "France"),
    ("GA", "Gabon"),
    ("GB", "Royaume-uni"),
    ("GD", "Grenade"),
    ("GE", "Géorgie"),
    ("GF", "Guyane française"),
    ("GG", "Guernesey"),
    ("GH", "Ghana"),
    ("GI", "Gibraltar"),
    ("GL", "Groenland"),
    ("GM", "Gambie"),
    ("GN", "Guinée"),
    ("GP", "Guadeloupe"),
    ("GQ", "Guinée équatoriale"),
    ("GR", "Grèce"),
    ("GS", "Géorgie du sud et les îles Sandwich du sud"),
    ("GT", "Guatemala"),
    ("GU", "Guam"),
    ("GW", "Guinée-Bissau"),
    ("GY", "Guyana"),
    ("HK", "Hong Kong"),
    ("HM", "Îles Heard et îles McDonald"),
    ("HN", "Honduras"),
    ("HR", "Croatie"),
    ("HT", "Haïti"),
    ("HU", "Hongrie"),
    ("ID", "Indonesie"),
    ("IE", "Irlande"),
    ("IL", "Israël"),
    ("IM", "Île de Man"),
    ("IN", "Inde"),
    ("IO", "Territoire britannique de l'océan indien"),
    ("IQ", "Iraq"),
    ("IR", "Iran"),
    ("IS", "Islande"),
    ("IT", "Italie"),
    ("JE", "Jersey"),
    ("JM", "Jamaïque"),
    ("JO", "Jordanie"),
    ("JP", "Japon"),
    ("KE", "Kenya"),
    ("KG", "Kirghizistan"),
    ("KH", "Cambodge"),
    ("KI", "Kiribati"),
    ("KM", "Comores"),
    ("KN", "Saint-Christophe-et-Niévès"),
    ("KP", "Corée du nord"),
    ("KR", "Corée du sud"),
    ("KW", "Koweït"),
    ("KY", "Îles Caïmans"),
    ("KZ", "Kazakhstan"),
    ("LA", "Laos"),
    ("LB", "Liban"),
    ("LC", "Sainte-Lucie"),
    ("LI", "Liechtenstein"),
    ("LK", "Sri Lanka"),
    ("LR", "Libéria"),
    ("LS", "Lesotho"),
    ("LT", "Lituanie"),
    ("LU", "Luxembourg"),
    ("LV", "Lettonie"),
    ("LY", "Libye"),
    ("MA", "Maroc"),
    ("MC", "Monaco"),
    ("MD", "Moldavie"),
    ("ME", "Monténégro"),
    ("MF", "Saint Martin (partie française)"),
    ("MG", "Madagascar"),
    ("MH", "Îles Marshall"),
    ("MK", "Macédoine"),
    ("ML", "Mali"),
    ("MM", "Myanmar"),
    ("MN", "Mongolie"),
    ("MO", "Macao"),
    ("MP", "Îles Mariannes du nord"),
    ("MQ", "Martinique"),
    ("MR", "Mauritanie"),
    ("MS", "Montserrat"),
    ("MT", "Malte"),
    ("MU", "Maurice"),
    ("MV", "Maldives"),
    ("MW", "Malawi"),
    ("MX", "Mexique"),
    ("MY", "Malaisie"),
    ("MZ", "Mozambique"),
    ("NA", "Namibie"),
    ("NC", "Nouvelle-Calédonie"),
    ("NE", "Niger"),
    ("NF", "Île Norfolk"),
    ("NG", "Nigéria"),
    ("NI", "Nicaragua"),
    ("NL", "Pays-bas"),
    ("NO", "Norvège"),
    ("NP", "Népal"),
    ("NR", "Nauru"),
    ("NU", "Niue"),
    ("NZ", "Nouvelle-zélande"),
    ("OM", "Oman"),
    ("PA", "Panama"),
    ("PE", "Pérou"),
    ("PF", "Polynésie française"),
    ("PG", "Papouasie-Nouvelle-Guinée"),
    ("PH", "Philippines"),
    ("PK", "Pakistan"),
    ("PL", "Pologne"),
    ("PM", "Saint-Pierre-et-Miquelon"),
    ("PN", "Îles Pitcairn"),
    ("PR", "Porto Rico"),
    ("PS", "Palestine"),
    ("PT", "Portugal"),
    ("PW", "Palaos"),
    ("PY", "Paraguay"),
    ("QA", "Qatar"),
    ("RE", "Réunion"),
    ("RO", "Roumanie"),
    ("RS", "Serbie"),
    ("RU", "Russie"),
    ("RW", "Rwanda"),
    ("SA", "Arabie saoudite"),
    ("SB", "Îles Salomon"),
    ("SC", "Seychelles"),
    ("SD", "Soudan"),
    ("SE", "Suède"),
    ("SG", "Singapour"),
    ("SH", "Saint Hélène, Ascension et Tristan da Cunha"),
    ("SI", "Slovénie"),
    ("SJ", "Svalbard et île Jan Mayen"),
    ("SK", "Slovaquie"),
    ("SL", "Sierra Leone"),
    ("SM", "Saint-Marin"),
    ("SN", "Sénégal"),
    ("SO", "Somalie"),
    ("SR", "Suriname"),
    ("SS", "Soudan du sud"),
    ("ST", "Sao-Tomé-et-Principe"),
    ("SV", "Salvador"),
    ("SX", "Saint-Martin (partie néerlandaise)"),
    ("SY", "Syrie"),
    ("SZ", "Eswatini"),
    ("TC", "Îles turques-et-Caïques"),
    ("TD", "Tchad"),
    ("TF", "Terres australes et antarctiques françaises"),
    ("TG", "Togo"),
    ("TH", "Thaïlande"),
    ("TJ", "Tadjikistan"),
    ("TK", "Tokelau"),
    ("TL", "Timor oriental"),
    ("TM", "Turkménistan"),
    ("TN", "Tunisie"),
    ("TO", "Tonga"),
    ("TR", "Turquie"),
    ("TT", "Trinité-et-Tobago"),
    ("TV", "Tuvalu"),
    ("TW", "Taiwan"),
    ("TZ", "Tanzanie"),
    ("UA", "Ukraine"),
    ("UG", "Ouganda"),
    ("UM", "Îles mineures éloignées des États-Unis"),
    ("US", "États-Unis"),
    ("UY", "Uruguay"),
    ("UZ", "Ouzbékistan"),
    ("VA", "Vatican"),
    ("VC", "Saint-Vincent-et-les-Grenadines"),
    ("VE", "Vénézuela"),
    ("VG", "Îles vierges britanniques"),
    ("VI", "Îles vierges des États-Unis"),
    ("VN", "Viêt Nam"),
    ("VU", "Vanuatu"),
    ("WF", "Wallis-et-Futuna"),
    ("WS", "Samoa"),
    ("YE", "Yémen"),
    ("YT", "Mayotte"),
    ("ZA", "Afrique du sud"),
    ("ZM", "Zambie"),
    ("ZW", "Zimbabwe"),
];

const TEST_TYPES: &[(&str, &str)] = &[
    ("LP6464-4", "PCR"),
    ("LP217198-3", "antigénique"),
];

const TEST_DEVICES: &[(&str, &str)] = &[
    ("1833", "AAZ-LMB, COVID-VIRO"),
    ("1232", "Abbott Rapid Diagnostics, Panbio COVID-19 Ag Rapid Test"),
    ("1468", "ACON Laboratories, Inc, Flowflex SARS-CoV-2 Antigen rapid test"),
    ("1304", "AMEDA Labordiagnostik GmbH, AMP Rapid Test SARS-CoV-2 Ag"),
    ("1822", "Anbio (Xiamen) Biotechnology Co., Ltd, Rapid COVID-19 Antigen Test(Colloidal Gold)"),
    ("1815", "Anhui Deep Blue Medical Technology Co., Ltd, COVID-19 (SARS-CoV-2) Antigen Test Kit (Colloidal Gold) - Nasal Swab"),
    ("1736", "Anhui Deep Blue Medical Technology Co., Ltd, COVID-19 (SARS-CoV-2) Antigen Test Kit (Colloidal Gold)"),
    ("768", "ArcDia International Ltd, mariPOC SARS-CoV-2"),
    ("1654", "Asan Pharmaceutical CO., LTD, Asan Easy Test COVID-19 Ag"),
    ("2010", "Atlas Link Technology Co., Ltd., NOVA Test® SARS-CoV-2 Antigen Rapid Test Kit (Colloidal Gold Immunochromatography)"),
    ("1906", "Azure Biotech Inc, COVID-19 Antigen Rapid Test Device"),
    ("1870", "Beijing Hotgen Biotech Co., Ltd, Novel Coronavirus 2019-nCoV Antigen Test (Colloidal Gold)"),
    ("1331", "Beijing Lepu Medical Technology Co., Ltd, SARS-CoV-2 Antigen Rapid Test Kit"),
    ("1484", "Beijing Wantai Biological Pharmacy Enterprise Co., Ltd, Wantai SARS-CoV-2 Ag Rapid Test (FIA)"),
    ("1223", "BIOSYNEX S.A., BIOSYNEX COVID-19 Ag BSS"),
    ("1236", "BTNX Inc, Rapid Response COVID-19 Antigen Rapid Test"),
    ("1173", "CerTest Biotec, CerTest SARS-CoV-2 Card test"),
    ("1919", "Core Technology Co., Ltd, Coretests COVID-19 Ag Test"),
    ("1225", "DDS DIAGNOSTIC, Test Rapid Covid-19 Antigen (tampon nazofaringian)"),
    ("1375", "DIALAB GmbH, DIAQUICK COVID-19 Ag Cassette"),
    ("1244", "GenBody, Inc, Genbody COVID-19 Ag Test"),
    ("1253", "GenSure Biotech Inc, GenSure COVID-19 Antigen Rapid Kit (REF: P2004)"),
    ("1144", "Green Cross Medical Science Corp., GENEDIA W COVID-19 Ag"),
    ("1747", "Guangdong Hecin Scientific, Inc., 2019-nCoV Antigen Test Kit (colloidal gold method)"),
    ("1360", "Guangdong Wesail Biotech Co., Ltd, COVID-19 Ag Test Kit"),
    ("1437", "Guangzhou Wondfo Biotech Co., Ltd, Wondfo 2019-nCoV Antigen Test (Lateral Flow Method)"),
    ("1256", "Hangzhou AllTest Biotech Co., Ltd, COVID-19 and Influenza A+B Antigen Combo Rapid Test"),
    ("1363", "Hangzhou Clongene Biotech Co., Ltd, Covid-19 Antigen Rapid Test Kit"),
    ("1365", "Hangzhou Clongene Biotech Co., Ltd, COVID-19/Influenza A+B Antigen Combo Rapid Test"),
    ("1844", "Hangzhou Immuno Biotech Co.,Ltd, Immunobio SARS-CoV-2 Antigen ANTERIOR NASAL Rapid Test Kit (minimal invasive)"),
    ("1215", "Hangzhou Laihe Biotech Co., Ltd, LYHER Novel Coronavirus (COVID-19) Antigen Test Kit(Colloidal Gold)"),
    ("1392", "Hangzhou Testsea Biotechnology Co., Ltd, COVID-19 Antigen Test Cassette"),
    ("1767", "Healgen Scientific, Coronavirus Ag Rapid Test Cassette"),
    ("1263", "Humasis, Humasis COVID-19 Ag Test"),
    ("1333", "Joinstar Biomedical Technology Co., Ltd, COVID-19 Rapid Antigen Test (Colloidal Gold)"),
    ("1764", "JOYSBIO (Tianjin) Biotechnology Co., Ltd, SARS-CoV-2 Antigen Rapid Test Kit (Colloidal Gold)"),
    ("1266", "Labnovation Technologies Inc, SARS-CoV-2 Antigen Rapid Test Kit"),
    ("1267", "LumiQuick Diagnostics Inc, QuickProfile COVID-19 Antigen Test"),
    ("1268", "LumiraDX, LumiraDx SARS-CoV-2 Ag Test"),
    ("1180", "MEDsan GmbH, MEDsan SARS-CoV-2 Antigen Rapid Test"),
    ("1190", "möLab, COVID-19 Rapid Antigen Test"),
    ("1481", "MP Biomedicals, Rapid SARS-CoV-2 Antigen Test Card"),
    ("1162", "Nal von minden GmbH, NADAL COVID-19 Ag Test"),
    ("1420", "NanoEntek, FREND COVID-19 Ag"),
    ("1199", "Oncosem Onkolojik Sistemler San. ve Tic. A.S., CAT"),
    ("308", "PCL Inc, PCL COVID19 Ag Rapid FIA"),
    ("1271", "Precision Biosensor, Inc, Exdia COVID-19 Ag"),
    ("1341", "Qingdao Hightop Biotech Co., Ltd, SARS-CoV-2 Antigen Rapid Test (Immunochromatography)"),
    ("1097", "Quidel Corporation, Sofia SARS Antigen FIA"),
    ("1606", "RapiGEN Inc, BIOCREDIT COVID-19 Ag - SARS-CoV 2 Antigen test"),
    ("1604", "Roche (SD BIOSENSOR), SARS-CoV-2 Antigen Rapid Test"),
    ("1489", "Safecare Biotech (Hangzhou) Co. Ltd, COVID-19 Antigen Rapid Test Kit (Swab)"),
    ("1490", "Safecare Biotech (Hangzhou) Co. Ltd, Multi-Respiratory Virus Antigen Test Kit(Swab)  (Influenza A+B/ COVID-19)"),
    ("344", "SD BIOSENSOR Inc, STANDARD F COVID-19 Ag FIA"),
    ("345", "SD BIOSENSOR Inc, STANDARD Q COVID-19 Ag Test"),
    ("1319", "SGA Medikal, V-Chek SARS-CoV-2 Ag Rapid Test Kit (Colloidal Gold)"),
    ("2017", "Shenzhen Ultra-Diagnostics Biotec.Co.,Ltd, SARS-CoV-2 Antigen Test Kit"),
    ("1769", "Shenzhen Watmind Medical Co., Ltd, SARS-CoV-2 Ag Diagnostic Test Kit (Colloidal Gold)"),
    ("1574", "Shenzhen Zhenrui Biotechnology Co., Ltd, Zhenrui ®COVID-19 Antigen Test Cassette"),
    ("1218", "Siemens Healthineers, CLINITEST Rapid Covid-19 Antigen Test"),
    ("1114", "Sugentech, Inc, SGTi-flex COVID-19 Ag"),
    ("1466", "TODA PHARMA, TODA CORONADIAG Ag"),
    ("1934", "Tody Laboratories Int., Coronavirus (SARS-CoV 2) Antigen - Oral Fluid"),
    ("1443", "Vitrosens Biotechnology Co., Ltd, RapidFor SARS-CoV-2 Rapid Ag Test"),
    ("1246", "VivaChek Biotech (Hangzhou) Co., Ltd, Vivadiag SARS CoV 2 Ag Rapid Test"),
    ("1763", "Xiamen AmonMed Biotechnology Co., Ltd, COVID-19 Antigen Rapid Test Kit (Colloidal Gold)"),
    ("1278", "Xiamen Boson Biotech Co. Ltd, Rapid SARS-CoV-2 Antigen Test Card"),
    ("1456", "Xiamen Wiz Biotech Co., Ltd, SARS-CoV-2 Antigen Rapid Test"),
    ("1884", "Xiamen Wiz Biotech Co., Ltd, SARS-CoV-2 Antigen Rapid Test (Colloidal Gold)"),
    ("1296", "Zhejiang Anji Saianfu Biotech Co., Ltd, AndLucky COVID-19 Antigen Rapid Test"),
    ("1295", "Zhejiang Anji Saianfu Biotech Co., Ltd, reOpenTest COVID-19 Antigen Rapid Test"),
    ("1343", "Zhezhiang Orient Gene Biotech Co., Ltd, Coronavirus Ag Rapid Test Cassette (Swab)"),
];

const TEST_RESULTS: &[(&str, &str)] = &[
    ("260415000", "négatif"),
    ("260373001", "positif"),
];

const VACCINATION_FIELDS: &[(&str, &str, Option<&str>)] = &[
    ("tg", "Maladie ciblée :", Some(DISEASE)),
    ("vp", "Type de vaccin :", Some(VACCINE_TYPE)),
    ("mp", "Nom du produit :", Some(PRODUCT)),
    ("ma", "Fabricant :", Some(MANUFACTURER)),
    ("dn", "Nombre de doses injectées :", None),
    ("sd", "Nombre total de doses requises :", None),
    ("dt", "Date de la dernière injection :", None),
    ("co", "Pays :", Some(COUNTRY)),
    ("is", "Autorité de délivrance :", None),
    ("ci", "Identifiant du certificat :", None),
];

const TEST_FIELDS: &[(&str, &str, Option<&str>)] = &[
    ("tg", "Maladie ciblée :", Some(DISEASE)),
    ("tt", "Type de test :", Some(TEST_TYPE)),
    ("nm", "Nom du test :", None),
    ("ma", "Test antigénique :", Some(TEST_DEVICE)),
    ("sc", "Date du test :", None),
    ("dr", "Date du résultat :", None),
    ("tr", "Résultat du test :", Some(TEST_RESULT)),
    ("tc", "Centre de test :", None),
    ("co", "Pays :", Some(COUNTRY)),
    ("is", "Autorité de délivrance :", None),
    ("ci", "Identifiant du certificat :", None),
];

const RECOVERY_FIELDS: &[(&str, &str, Option<&str>)] = &[
    ("tg", "Maladie ciblée :", Some(DISEASE)),
    ("fr", "Date du premier test positif :", None),
    ("co", "Pays :", Some(COUNTRY)),
    ("is", "Autorité de délivrance :", None),
    ("df", "Date de début de validité :", None),
    ("du", "Date de fin de validité :", None),
    ("ci", "Identifiant du certificat :", None),
];

fn table(entries: &[(&str, &str)]) -> LookupTable {
    entries.iter().copied().collect()
}

fn schema(
    kind: VariantKind,
    name: &str,
    fields: &[(&str, &str, Option<&str>)],
) -> VariantSchema {
    VariantSchema {
        kind,
        name: name.to_string(),
        fields: fields
            .iter()
            .map(|(code, label, table)| FieldSpec {
                code: code.to_string(),
                label: label.to_string(),
                table: table.map(str::to_string),
            })
            .collect(),
    }
}

fn banner(lines: &[(&str, &str)]) -> Banner {
    lines
        .iter()
        .map(|(label, text)| (label.to_string(), text.to_string()))
        .collect()
}

pub(crate) fn reference_data() -> ReferenceData {
    let tables = vec![
        (DISEASE, table(DISEASES)),
        (VACCINE_TYPE, table(VACCINE_TYPES)),
        (PRODUCT, table(PRODUCTS)),
        (MANUFACTURER, table(MANUFACTURERS)),
        (COUNTRY, table(COUNTRIES)),
        (TEST_TYPE, table(TEST_TYPES)),
        (TEST_DEVICE, table(TEST_DEVICES)),
        (TEST_RESULT, table(TEST_RESULTS)),
    ]
    .into_iter()
    .map(|(name, table)| (name.to_string(), table))
    .collect();

    ReferenceData {
        labels: DocumentLabels {
            issuer: "Émetteur du document :".to_string(),
            issued_at: "Date d’émission :".to_string(),
            expires_at: "Date de fin de validité :".to_string(),
            key_id: "ID de la clé de signature :".to_string(),
            version: "Version :".to_string(),
            last_name: "Nom :".to_string(),
            first_name: "Prénom :".to_string(),
            birth_date: "Date de naissance :".to_string(),
            certificate_type: "Type de certificat :".to_string(),
        },
        opening_banner: banner(&[
            ("", ""),
            ("##########", "Certificat(s) ##########"),
            ("", ""),
        ]),
        closing_banner: banner(&[("", ""), ("##########", ""), ("", "")]),
        tables,
        variants: vec![
            schema(VariantKind::Recovery, "Rétablissement", RECOVERY_FIELDS),
            schema(VariantKind::Test, "Test", TEST_FIELDS),
            schema(VariantKind::Vaccination, "Vaccination", VACCINATION_FIELDS),
        ],
    }
}
