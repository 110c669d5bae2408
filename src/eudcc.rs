use std::collections::BTreeMap;
use std::io::{self, Write};

use base64::{engine::general_purpose::STANDARD, Engine};
use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use serde_cbor::{from_slice, to_vec, Value};
use tracing::{debug, trace};

use crate::error::{Error, Result};

pub const HC1_FIELD: &str = "HC1:";

pub const ISSUER_CLAIM_KEY: i128 = 1;
pub const EXPIRY_CLAIM_KEY: i128 = 4;
pub const ISSUED_AT_CLAIM_KEY: i128 = 6;
pub const HCERT_CLAIM_KEY: i128 = -260;

/// Key under which the base64 signing key identifier is stored.
pub const KID_KEY: &str = "kid";

const COSE_SIGN1_TAG: u64 = 18;
const CWT_TAG: u64 = 61;
const ALG_LABEL: i128 = 1;
const KID_LABEL: i128 = 4;
const ES256: i128 = -7;

/// Claims decoded from a certificate payload, plus the signing key
/// identifier under [`KID_KEY`] when the envelope carries one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawAttributes(BTreeMap<Value, Value>);

impl RawAttributes {
    pub fn new(claims: BTreeMap<Value, Value>) -> Self {
        RawAttributes(claims)
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn claim(&self, key: i128) -> Option<&Value> {
        self.0.get(&Value::Integer(key))
    }

    pub fn key_id(&self) -> Option<&str> {
        match self.0.get(&kid_key()) {
            Some(Value::Text(kid)) => Some(kid),
            _ => None,
        }
    }

    pub fn claims(&self) -> &BTreeMap<Value, Value> {
        &self.0
    }

    /// The claims without the injected key identifier.
    pub fn without_key_id(&self) -> RawAttributes {
        let mut claims = self.0.clone();
        claims.remove(&kid_key());
        RawAttributes(claims)
    }

    pub fn into_inner(self) -> BTreeMap<Value, Value> {
        self.0
    }

    fn insert_key_id(&mut self, kid: &[u8]) {
        self.0.insert(kid_key(), Value::Text(STANDARD.encode(kid)));
    }
}

impl From<BTreeMap<Value, Value>> for RawAttributes {
    fn from(claims: BTreeMap<Value, Value>) -> Self {
        RawAttributes(claims)
    }
}

fn kid_key() -> Value {
    Value::Text(KID_KEY.to_string())
}

/// Key identifier and payload of a COSE_Sign1 structure. The signature is
/// not checked.
#[derive(Debug)]
struct SignedEnvelope {
    key_id: Option<Vec<u8>>,
    payload: Vec<u8>,
}

impl SignedEnvelope {
    fn from_slice(data: &[u8]) -> Result<Self> {
        let value: Value =
            from_slice(data).map_err(|e| Error::Envelope(e.to_string()))?;

        let parts = match untag(value)? {
            Value::Array(parts) => parts,
            other => {
                return Err(Error::Envelope(format!(
                    "expected a COSE_Sign1 array, found {}",
                    describe(&other)
                )))
            }
        };

        let (protected, unprotected, payload) = match parts.as_slice() {
            [protected, unprotected, payload, _signature] => {
                (protected, unprotected, payload)
            }
            _ => {
                return Err(Error::Envelope(format!(
                    "expected 4 COSE_Sign1 elements, found {}",
                    parts.len()
                )))
            }
        };

        let protected = match protected {
            Value::Bytes(bytes) if bytes.is_empty() => BTreeMap::new(),
            Value::Bytes(bytes) => match from_slice(bytes) {
                Ok(Value::Map(header)) => header,
                Ok(other) => {
                    return Err(Error::Envelope(format!(
                        "protected header is {}, not a map",
                        describe(&other)
                    )))
                }
                Err(e) => {
                    return Err(Error::Envelope(format!("protected header: {}", e)))
                }
            },
            other => {
                return Err(Error::Envelope(format!(
                    "protected header is {}, not a byte string",
                    describe(other)
                )))
            }
        };

        let unprotected = match unprotected {
            Value::Map(header) => header,
            other => {
                return Err(Error::Envelope(format!(
                    "unprotected header is {}, not a map",
                    describe(other)
                )))
            }
        };

        let payload = match payload {
            Value::Bytes(payload) => payload.clone(),
            other => {
                return Err(Error::Envelope(format!(
                    "payload is {}, not a byte string",
                    describe(other)
                )))
            }
        };

        let key_id = match header_key_id(&protected)? {
            Some(kid) => Some(kid),
            None => header_key_id(unprotected)?,
        };

        Ok(SignedEnvelope { key_id, payload })
    }
}

fn untag(value: Value) -> Result<Value> {
    match value {
        Value::Tag(COSE_SIGN1_TAG, inner) | Value::Tag(CWT_TAG, inner) => {
            untag(*inner)
        }
        Value::Tag(tag, _) => {
            Err(Error::Envelope(format!("unexpected CBOR tag {}", tag)))
        }
        other => Ok(other),
    }
}

fn header_key_id(header: &BTreeMap<Value, Value>) -> Result<Option<Vec<u8>>> {
    match header.get(&Value::Integer(KID_LABEL)) {
        None => Ok(None),
        Some(Value::Bytes(kid)) => Ok(Some(kid.clone())),
        Some(other) => Err(Error::Envelope(format!(
            "key identifier is {}, not a byte string",
            describe(other)
        ))),
    }
}

pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Integer(_) => "an integer",
        Value::Float(_) => "a float",
        Value::Bytes(_) => "a byte string",
        Value::Text(_) => "a text string",
        Value::Array(_) => "an array",
        Value::Map(_) => "a map",
        Value::Tag(..) => "a tagged value",
        _ => "an unsupported value",
    }
}

/// Inflates a zlib stream, failing when it ends before the trailer.
fn inflate(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut inflated = Vec::with_capacity(compressed.len() * 2 + 64);

    loop {
        let (total_in, total_out) = (inflater.total_in(), inflater.total_out());
        let status = inflater
            .decompress_vec(
                &compressed[total_in as usize..],
                &mut inflated,
                FlushDecompress::None,
            )
            .map_err(|e| {
                Error::Decompress(io::Error::new(io::ErrorKind::InvalidData, e))
            })?;

        match status {
            Status::StreamEnd => return Ok(inflated),
            Status::Ok | Status::BufError => {
                if inflated.len() == inflated.capacity() {
                    inflated.reserve(inflated.capacity());
                } else if inflater.total_in() == total_in
                    && inflater.total_out() == total_out
                {
                    return Err(Error::Decompress(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "truncated zlib stream",
                    )));
                }
            }
        }
    }
}

/// Decodes one `HC1:` line into its raw claims.
///
/// The line must not carry its trailing newline; the base45 alphabet
/// includes the space character, so no other trimming is done here.
pub fn decode(data: &str) -> Result<RawAttributes> {
    let base45_data = data
        .strip_prefix(HC1_FIELD)
        .ok_or(Error::UnsupportedFormat { prefix: HC1_FIELD })?;

    let base45_decoded = base45::decode(base45_data)?;
    debug!(bytes = base45_decoded.len(), "base45 decoded");

    let cbor_data = inflate(&base45_decoded)?;
    debug!(bytes = cbor_data.len(), "zlib inflated");

    let envelope = SignedEnvelope::from_slice(&cbor_data)?;
    debug!(
        payload = envelope.payload.len(),
        has_kid = envelope.key_id.is_some(),
        "envelope decoded"
    );

    let claims = match from_slice(&envelope.payload) {
        Ok(Value::Map(claims)) => claims,
        Ok(other) => {
            return Err(Error::Payload(format!(
                "payload is {}, not a map",
                describe(&other)
            )))
        }
        Err(e) => return Err(Error::Payload(e.to_string())),
    };
    trace!(?claims, "payload decoded");

    let mut attributes = RawAttributes(claims);
    if let Some(kid) = envelope.key_id {
        attributes.insert_key_id(&kid);
    }

    Ok(attributes)
}

/// Builds an `HC1:` line from claims, the inverse of [`decode`].
///
/// Any key identifier already stored in `attributes` is dropped in favour
/// of `key_id`. The envelope carries an empty signature.
pub fn encode(attributes: &RawAttributes, key_id: Option<&[u8]>) -> Result<String> {
    let claims = attributes.without_key_id().into_inner();
    let payload =
        to_vec(&Value::Map(claims)).map_err(|e| Error::Payload(e.to_string()))?;

    let mut protected = BTreeMap::new();
    protected.insert(Value::Integer(ALG_LABEL), Value::Integer(ES256));
    if let Some(kid) = key_id {
        protected.insert(Value::Integer(KID_LABEL), Value::Bytes(kid.to_vec()));
    }
    let protected = to_vec(&Value::Map(protected))
        .map_err(|e| Error::Envelope(e.to_string()))?;

    let envelope = Value::Tag(
        COSE_SIGN1_TAG,
        Box::new(Value::Array(vec![
            Value::Bytes(protected),
            Value::Map(BTreeMap::new()),
            Value::Bytes(payload),
            Value::Bytes(Vec::new()),
        ])),
    );
    let cbor_data = to_vec(&envelope).map_err(|e| Error::Envelope(e.to_string()))?;

    let mut zlibencoder = ZlibEncoder::new(Vec::new(), Compression::default());
    zlibencoder.write_all(&cbor_data).map_err(Error::Decompress)?;
    let compressed = zlibencoder.finish().map_err(Error::Decompress)?;

    Ok(format!("{}{}", HC1_FIELD, base45::encode(&compressed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    // Taken from:
    // https://github.com/eu-digital-green-certificates/dgc-testdata/blob/main/IT/2DCode/raw/1.json
    // It is licensed under Apache-2.0 License.
    const VACCINE_RECORD_DATA: &str = "HC1:6BFOXN%TS3DH0YOJ58S S-W5HDC *M0II5XHC9B5G2+$N IOP-IA%NFQGRJPC%OQHIZC4.OI1RM8ZA.A5:S9MKN4NN3F85QNCY0O%0VZ001HOC9JU0D0HT0HB2PL/IB*09B9LW4T*8+DCMH0LDK2%K:XFE70*LP$V25$0Q:J:4MO1P0%0L0HD+9E/HY+4J6TH48S%4K.GJ2PT3QY:GQ3TE2I+-CPHN6D7LLK*2HG%89UV-0LZ 2ZJJ524-LH/CJTK96L6SR9MU9DHGZ%P WUQRENS431T1XCNCF+47AY0-IFO0500TGPN8F5G.41Q2E4T8ALW.INSV$ 07UV5SR+BNQHNML7 /KD3TU 4V*CAT3ZGLQMI/XI%ZJNSBBXK2:UG%UJMI:TU+MMPZ5$/PMX19UE:-PSR3/$NU44CBE6DQ3D7B0FBOFX0DV2DGMB$YPF62I$60/F$Z2I6IFX21XNI-LM%3/DF/U6Z9FEOJVRLVW6K$UG+BKK57:1+D10%4K83F+1VWD1NE";

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    fn field<'a>(map: &'a Value, key: &str) -> &'a Value {
        match map {
            Value::Map(m) => &m[&text(key)],
            other => panic!("expected a map, got {:?}", other),
        }
    }

    fn sample_claims() -> RawAttributes {
        let mut claims = BTreeMap::new();
        claims.insert(Value::Integer(ISSUER_CLAIM_KEY), text("FR"));
        claims.insert(Value::Integer(ISSUED_AT_CLAIM_KEY), Value::Integer(1_621_592_200));
        claims.insert(Value::Integer(EXPIRY_CLAIM_KEY), Value::Integer(1_637_148_824));
        RawAttributes::new(claims)
    }

    fn token_from_cbor(cbor: &[u8]) -> String {
        let mut zlibencoder = ZlibEncoder::new(Vec::new(), Compression::default());
        zlibencoder.write_all(cbor).unwrap();
        format!("{}{}", HC1_FIELD, base45::encode(&zlibencoder.finish().unwrap()))
    }

    fn envelope(protected: Value, unprotected: Value, payload: Value) -> Vec<u8> {
        to_vec(&Value::Tag(
            COSE_SIGN1_TAG,
            Box::new(Value::Array(vec![
                protected,
                unprotected,
                payload,
                Value::Bytes(vec![]),
            ])),
        ))
        .unwrap()
    }

    #[test]
    fn decode_test() {
        let c1 = decode(VACCINE_RECORD_DATA).unwrap();

        assert_eq!(c1.claim(ISSUER_CLAIM_KEY), Some(&text("IT")));
        assert_eq!(
            c1.claim(ISSUED_AT_CLAIM_KEY),
            Some(&Value::Integer(1_621_593_224))
        );
        assert_eq!(
            c1.claim(EXPIRY_CLAIM_KEY),
            Some(&Value::Integer(1_637_148_824))
        );
        assert_eq!(c1.key_id(), Some("OTAXaM3aBRM="));

        let entries = match c1.claim(HCERT_CLAIM_KEY) {
            Some(Value::Map(entries)) => entries,
            other => panic!("unexpected hcert claim {:?}", other),
        };
        let dcc = &entries[&Value::Integer(1)];
        assert_eq!(field(dcc, "ver"), &text("1.0.0"));
        assert_eq!(field(dcc, "dob"), &text("1977-06-16"));
        assert_eq!(field(field(dcc, "nam"), "fn"), &text("Di Caprio"));
        assert_eq!(field(field(dcc, "nam"), "gn"), &text("Marilù Teresa"));

        let vaccine = match field(dcc, "v") {
            Value::Array(records) => &records[0],
            other => panic!("unexpected vaccination records {:?}", other),
        };
        assert_eq!(field(vaccine, "tg"), &text("840539006"));
        assert_eq!(field(vaccine, "mp"), &text("EU/1/20/1528"));
        assert_eq!(field(vaccine, "dn"), &Value::Integer(2));
        assert_eq!(
            field(vaccine, "ci"),
            &text("01ITE7300E1AB2A84C719004F103DCB1F70A#6")
        );
    }

    #[test]
    fn rejects_missing_prefix() {
        let err = decode("XY1:6BFOXN%TS3DH0YOJ58S").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
        assert_eq!(decode("").unwrap_err().kind(), ErrorKind::UnsupportedFormat);
        assert_eq!(decode("hc1:ABC").unwrap_err().kind(), ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn rejects_invalid_base45() {
        assert_eq!(decode("HC1:abc").unwrap_err().kind(), ErrorKind::Decode);
        // a lone trailing character cannot encode a byte
        assert_eq!(decode("HC1:ABC1").unwrap_err().kind(), ErrorKind::Decode);
    }

    #[test]
    fn rejects_corrupt_zlib_stream() {
        let token = format!("{}{}", HC1_FIELD, base45::encode(b"not a zlib stream"));
        assert_eq!(decode(&token).unwrap_err().kind(), ErrorKind::Decompress);
    }

    #[test]
    fn rejects_truncated_zlib_stream() {
        let cbor = to_vec(&text("some envelope bytes that will not fit")).unwrap();
        let mut zlibencoder = ZlibEncoder::new(Vec::new(), Compression::default());
        zlibencoder.write_all(&cbor).unwrap();
        let mut compressed = zlibencoder.finish().unwrap();
        compressed.truncate(compressed.len() - 4);

        let token = format!("{}{}", HC1_FIELD, base45::encode(&compressed));
        assert_eq!(decode(&token).unwrap_err().kind(), ErrorKind::Decompress);
    }

    #[test]
    fn rejects_non_array_envelope() {
        let token = token_from_cbor(&to_vec(&text("hello")).unwrap());
        assert_eq!(decode(&token).unwrap_err().kind(), ErrorKind::Envelope);
    }

    #[test]
    fn rejects_short_envelope() {
        let cbor = to_vec(&Value::Array(vec![Value::Bytes(vec![]), Value::Map(BTreeMap::new())]))
            .unwrap();
        let token = token_from_cbor(&cbor);
        assert_eq!(decode(&token).unwrap_err().kind(), ErrorKind::Envelope);
    }

    #[test]
    fn rejects_detached_payload() {
        let cbor = envelope(Value::Bytes(vec![]), Value::Map(BTreeMap::new()), Value::Null);
        let token = token_from_cbor(&cbor);
        assert_eq!(decode(&token).unwrap_err().kind(), ErrorKind::Envelope);
    }

    #[test]
    fn rejects_unexpected_tag() {
        let cbor = to_vec(&Value::Tag(98, Box::new(Value::Array(vec![])))).unwrap();
        let token = token_from_cbor(&cbor);
        assert_eq!(decode(&token).unwrap_err().kind(), ErrorKind::Envelope);
    }

    #[test]
    fn rejects_non_map_payload() {
        let payload = to_vec(&Value::Array(vec![Value::Integer(1)])).unwrap();
        let cbor = envelope(
            Value::Bytes(vec![]),
            Value::Map(BTreeMap::new()),
            Value::Bytes(payload),
        );
        let token = token_from_cbor(&cbor);
        assert_eq!(decode(&token).unwrap_err().kind(), ErrorKind::Payload);
    }

    #[test]
    fn rejects_garbage_payload() {
        let cbor = envelope(
            Value::Bytes(vec![]),
            Value::Map(BTreeMap::new()),
            Value::Bytes(vec![0xff, 0x00]),
        );
        let token = token_from_cbor(&cbor);
        assert_eq!(decode(&token).unwrap_err().kind(), ErrorKind::Payload);
    }

    #[test]
    fn reads_key_id_from_unprotected_header() {
        let mut unprotected = BTreeMap::new();
        unprotected.insert(Value::Integer(KID_LABEL), Value::Bytes(vec![0xde, 0xad, 0xbe, 0xef]));
        let payload = to_vec(&Value::Map(sample_claims().into_inner())).unwrap();
        let cbor = envelope(Value::Bytes(vec![]), Value::Map(unprotected), Value::Bytes(payload));

        let decoded = decode(&token_from_cbor(&cbor)).unwrap();
        assert_eq!(decoded.key_id(), Some("3q2+7w=="));
    }

    #[test]
    fn untagged_envelope_is_accepted() {
        let payload = to_vec(&Value::Map(sample_claims().into_inner())).unwrap();
        let cbor = to_vec(&Value::Array(vec![
            Value::Bytes(vec![]),
            Value::Map(BTreeMap::new()),
            Value::Bytes(payload),
            Value::Bytes(vec![]),
        ]))
        .unwrap();

        let decoded = decode(&token_from_cbor(&cbor)).unwrap();
        assert_eq!(decoded, sample_claims());
        assert_eq!(decoded.key_id(), None);
    }

    #[test]
    fn encode_then_decode() {
        let claims = sample_claims();
        let token = encode(&claims, Some(&b"key-1"[..])).unwrap();
        assert!(token.starts_with(HC1_FIELD));

        let decoded = decode(&token).unwrap();
        assert_eq!(decoded.key_id(), Some("a2V5LTE="));
        assert_eq!(decoded.without_key_id(), claims);
    }

    #[test]
    fn encode_without_key_id() {
        let claims = sample_claims();
        let decoded = decode(&encode(&claims, None).unwrap()).unwrap();
        assert_eq!(decoded, claims);
    }
}
