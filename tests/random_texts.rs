use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use freqcrack::{analyze_text, shift_text, AnalysisConfig, ENGLISH_BY_FREQUENCY};

const PLAIN: &str = "it was the best of times it was the worst of times it was the age of \
wisdom it was the age of foolishness it was the epoch of belief it was the epoch of \
incredulity it was the season of light it was the season of darkness";

fn random_text(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| {
            if rng.gen_ratio(1, 6) {
                ' '
            } else {
                rng.gen_range(b'a'..=b'z') as char
            }
        })
        .collect()
}

#[test]
fn caesar_lines_recover_shifted_plaintext() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let k = rng.gen_range(1..26);
        let cipher = shift_text(PLAIN, k);
        let report = analyze_text(&cipher, &AnalysisConfig::default()).unwrap();
        let plain_prefix: String = PLAIN.chars().take(25).collect();
        assert_eq!(report.caesar[26 - k].text, plain_prefix);
    }
}

#[test]
fn random_reports_are_consistent() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let len = rng.gen_range(1..400);
        let n = rng.gen_range(1..=20);
        let text = random_text(&mut rng, len);
        let report = analyze_text(&text, &AnalysisConfig::with_width(n)).unwrap();

        assert_eq!(report.text_len, len);
        assert_eq!(report.windows, (len + 1).saturating_sub(n));
        let counted: usize = report.distribution.iter().map(|e| e.count).sum();
        assert_eq!(counted, report.windows);

        let guess = report.decryption.unwrap();
        assert_eq!(guess.len(), text.len());
        for (a, b) in text.chars().zip(guess.chars()) {
            assert_eq!(a == ' ', b == ' ');
            assert!(b == ' ' || ENGLISH_BY_FREQUENCY.contains(b));
        }
    }
}
