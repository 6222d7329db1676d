use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

/// Text recovered from raw bytes, with the charset it was decoded as.
#[derive(Debug)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static str,
    pub confidence: f32,
}

pub fn decode(bytes: &[u8]) -> DecodedText {
    // BOM wins over detection and is stripped from the text.
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return DecodedText {
            text: text.into_owned(),
            encoding: encoding.name(),
            confidence: 0.99,
        };
    }

    let encoding = detect(bytes);
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);

    DecodedText {
        text: text.into_owned(),
        encoding: encoding.name(),
        confidence: estimate_confidence(bytes.len(), had_errors),
    }
}

fn detect(bytes: &[u8]) -> &'static Encoding {
    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

fn estimate_confidence(len: usize, had_errors: bool) -> f32 {
    if had_errors {
        return 0.35;
    }

    if len < 64 {
        0.55
    } else if len < 512 {
        0.70
    } else if len < 4096 {
        0.82
    } else {
        0.90
    }
}
