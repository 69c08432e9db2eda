//! Hydration tips shown at the bottom of the page.

use chrono::{Datelike, NaiveDate};

const TIPS: [&str; 10] = [
    "Start the day with a glass of water to wake your body up.",
    "Keep a bottle in sight as a reminder to drink.",
    "Small, frequent sips make the habit stick.",
    "Drink water before meals; it helps you feel full.",
    "Adjust your goal to the weather and how active you are.",
    "Set reminders for your regular breaks.",
    "Choose water over sugary drinks.",
    "Check the colour of your urine: the lighter, the better.",
    "Eat water-rich fruit such as watermelon and oranges.",
    "Pair drinking water with tasks you already do every day.",
];

/// Tip for `date`; stable for the whole day, rotating day by day
pub fn tip_of_the_day(date: NaiveDate) -> &'static str {
    TIPS[date.ordinal0() as usize % TIPS.len()]
}
