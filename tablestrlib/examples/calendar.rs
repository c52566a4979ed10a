//! Render the January 2022 calendar from the crate docs.
//!
//! Run with: cargo run -p tablestrlib --example calendar

use tablestrlib::{build_string, TableModel, TableStyle};

fn main() {
    let mut model = TableModel::new();
    model.set_caption("2022 January").set_head(
        ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
            .map(String::from)
            .to_vec(),
    );

    // January 1st, 2022 fell on a Saturday
    let offset = 6;
    let mut day = 0;
    while day < 31 + offset {
        let mut week = Vec::with_capacity(7);
        for _ in 0..7 {
            let date = day - offset + 1;
            week.push(if (1..=31).contains(&date) {
                date.to_string()
            } else {
                String::new()
            });
            day += 1;
        }
        model.add_row(week);
    }

    println!("{}", build_string(&model, &TableStyle::default()));
}
