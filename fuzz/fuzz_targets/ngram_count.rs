use freqcrack::{NgramTable, WindowBoundary};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let Some((&n, rest)) = data.split_first() else {
                return;
            };
            let n = (n as usize % 20) + 1;
            let text = String::from_utf8_lossy(rest);
            let len = text.chars().count();
            for boundary in [WindowBoundary::Exact, WindowBoundary::Legacy] {
                let table = NgramTable::count(&text, n, boundary).unwrap();
                assert_eq!(table.total(), boundary.window_count(len, n));
            }
        });
    }
}
