use freqcrack::{shift_text, FrequencyTable, NgramTable, WindowBoundary};
use proptest::prelude::*;

fn boundary() -> impl Strategy<Value = WindowBoundary> {
    prop_oneof![Just(WindowBoundary::Exact), Just(WindowBoundary::Legacy)]
}

proptest! {
    #[test]
    fn counts_sum_to_windows(text in "[a-e ]{0,64}", n in 1usize..6, b in boundary()) {
        let len = text.chars().count();
        let table = NgramTable::count(&text, n, b).unwrap();
        let sum: usize = table.entries().iter().map(|e| e.count).sum();
        prop_assert_eq!(sum, table.total());
        prop_assert_eq!(sum, b.window_count(len, n));
        if b == WindowBoundary::Exact && len >= n {
            prop_assert_eq!(sum, len - n + 1);
        }
    }

    #[test]
    fn frequencies_are_count_over_len(text in "[a-z ]{1,64}", n in 1usize..4) {
        let len = text.chars().count();
        let table = NgramTable::count(&text, n, WindowBoundary::Exact).unwrap();
        let freqs = FrequencyTable::from_ngrams(&table, len).unwrap();
        for e in freqs.entries() {
            prop_assert!((e.frequency - e.count as f64 / len as f64).abs() < 1e-12);
            prop_assert!(e.frequency > 0.0 && e.frequency <= 1.0);
        }
        let expected = table.total() as f64 / len as f64;
        prop_assert!((freqs.sum() - expected).abs() < 1e-9);
    }

    #[test]
    fn sorted_is_descending(text in "[a-d]{1,48}") {
        let table = NgramTable::count(&text, 1, WindowBoundary::Exact).unwrap();
        let sorted = table.sorted();
        prop_assert!(sorted.windows(2).all(|w| w[0].count >= w[1].count));
        prop_assert_eq!(sorted.len(), table.len());
    }

    #[test]
    fn caesar_cycle_closes(text in "[a-z ]{0,25}", k in 0usize..26) {
        prop_assert_eq!(shift_text(&text, 26), text.clone());
        prop_assert_eq!(shift_text(&shift_text(&text, k), 26 - k), text.clone());
    }

    #[test]
    fn caesar_keeps_length_and_spaces(text in "[a-z ]{0,25}", k in 0usize..26) {
        let shifted = shift_text(&text, k);
        prop_assert_eq!(shifted.len(), text.len());
        for (a, b) in text.chars().zip(shifted.chars()) {
            prop_assert_eq!(a == ' ', b == ' ');
            if a != ' ' {
                prop_assert!(b.is_ascii_lowercase());
            }
        }
    }
}
