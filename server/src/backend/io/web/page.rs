//! HTML rendering of the dashboard.
//!
//! The page is rebuilt from a [`DashboardView`] on every request. All
//! controls are plain forms posting back to the server, which answers with a
//! redirect to `/` so the browser reloads the whole page.

use shared::{
    DashboardView, Entry, HistoryRange, CUSTOM_AMOUNT_MIN_ML, CUSTOM_AMOUNT_STEP_ML, GOAL_MAX_ML,
    GOAL_MIN_ML, GOAL_STEP_ML, QUICK_ADD_AMOUNTS_ML,
};

/// One-shot confirmation carried in the redirect query string
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notice {
    EntryAdded(f64),
    GoalSaved(u32),
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 760px; margin: 0 auto; padding: 1.5rem; color: #1f2d3d; background: #f5f9fc; }
h1 { margin-bottom: 0; }
.subtitle { color: #5a6e8c; margin-top: .25rem; }
section { background: #fff; border-radius: 10px; padding: 1rem 1.5rem; margin: 1rem 0; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
progress { width: 100%; height: 1.25rem; }
.metric { font-size: 2rem; font-weight: 600; }
.metric small { font-size: 1rem; color: #5a6e8c; font-weight: 400; }
.quick-add button, .custom-add button, .goal button { padding: .5rem 1rem; margin-right: .5rem; }
.rewards span { margin-right: 1.5rem; }
.celebrate { background: #e3f6e8; border-left: 4px solid #2e9d4f; padding: .5rem 1rem; }
.tabs a { margin-right: 1rem; }
.tabs a.active { font-weight: 700; text-decoration: none; color: #1f2d3d; }
.info { background: #e8f1fb; padding: .75rem 1rem; border-radius: 6px; }
.toast { position: fixed; top: 1rem; right: 1rem; background: #2e9d4f; color: #fff; padding: .75rem 1.25rem; border-radius: 6px; animation: fade 4s forwards; }
@keyframes fade { 0%, 70% { opacity: 1; } 100% { opacity: 0; visibility: hidden; } }
footer { text-align: center; color: #5a6e8c; margin-top: 2rem; }
"#;

/// Millilitres without a trailing `.0` for whole amounts
pub fn format_ml(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.1}", amount)
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn range_field(range: HistoryRange) -> String {
    format!(r#"<input type="hidden" name="range" value="{}">"#, range.days())
}

fn render_notice(notice: Option<Notice>) -> String {
    match notice {
        Some(Notice::EntryAdded(amount)) => format!(
            r#"<div class="toast" role="status">💧 {} ml added!</div>"#,
            format_ml(amount)
        ),
        Some(Notice::GoalSaved(goal)) => format!(
            r#"<div class="toast" role="status">🎯 Goal saved at {} ml!</div>"#,
            goal
        ),
        None => String::new(),
    }
}

fn render_goal_section(view: &DashboardView) -> String {
    format!(
        r#"<section class="goal">
  <h2>🎯 Daily goal</h2>
  <form method="post" action="/goal">
    <label for="goal">Your daily water goal (ml)</label>
    <input id="goal" type="number" name="goal" min="{min}" max="{max}" step="{step}" value="{value}" required>
    {range}
    <button type="submit">Save</button>
  </form>
</section>"#,
        min = GOAL_MIN_ML,
        max = GOAL_MAX_ML,
        step = GOAL_STEP_ML,
        value = view.goal_ml,
        range = range_field(view.history_range),
    )
}

fn render_progress_section(view: &DashboardView) -> String {
    let progress = &view.progress;
    let celebrate = if progress.goal_reached() {
        r#"<p class="celebrate">🎉 Goal reached! Well done.</p>"#.to_string()
    } else {
        format!("<p>{} ml to go.</p>", format_ml(progress.remaining_ml()))
    };

    format!(
        r#"<section class="progress">
  <h2>📈 Today's progress</h2>
  <div class="metric">{consumed} ml <small>of {goal} ml</small></div>
  <progress max="100" value="{percent}">{percent}%</progress>
  <p><strong>{percent}%</strong></p>
  {celebrate}
  <p class="rewards"><span>🔥 Streak: <strong>{streak}</strong> days</span><span>🏆 Goals reached: <strong>{hits}</strong></span></p>
</section>"#,
        consumed = format_ml(progress.consumed_ml),
        goal = progress.goal_ml,
        percent = progress.percent,
        celebrate = celebrate,
        streak = view.stats.streak_days,
        hits = view.stats.goals_hit_total,
    )
}

fn render_add_section(view: &DashboardView) -> String {
    let range = range_field(view.history_range);
    let quick_buttons: String = QUICK_ADD_AMOUNTS_ML
        .iter()
        .map(|amount| {
            format!(
                r#"<button type="submit" name="amount" value="{amount}">+ {amount} ml</button>"#,
                amount = amount
            )
        })
        .collect();

    format!(
        r#"<section class="add">
  <h2>Add consumption</h2>
  <form class="quick-add" method="post" action="/entries">
    {range}
    {quick_buttons}
  </form>
  <form class="custom-add" method="post" action="/entries">
    <label for="amount">Other amount (ml)</label>
    <input id="amount" type="number" name="amount" min="{min}" step="{step}" value="{min}" required>
    {range}
    <button type="submit">Add</button>
  </form>
</section>"#,
        range = range,
        quick_buttons = quick_buttons,
        min = CUSTOM_AMOUNT_MIN_ML,
        step = CUSTOM_AMOUNT_STEP_ML,
    )
}

fn render_entry(entry: &Entry) -> String {
    format!(
        "<li>💧 {} ml at {}</li>",
        format_ml(entry.amount),
        entry.time_of_day()
    )
}

fn render_today_log(view: &DashboardView) -> String {
    if view.today_entries.is_empty() {
        return String::new();
    }

    // Most recent first
    let items: String = view.today_entries.iter().rev().map(render_entry).collect();
    format!(
        r#"<section class="log">
  <h2>Today's entries</h2>
  <ul>{}</ul>
</section>"#,
        items
    )
}

fn render_history_section(view: &DashboardView, chart_svg: Option<&str>) -> String {
    let tabs: String = HistoryRange::ALL
        .iter()
        .map(|range| {
            let class = if *range == view.history_range { r#" class="active""# } else { "" };
            format!(
                r#"<a href="/?range={}"{}>{}</a>"#,
                range.days(),
                class,
                range.label()
            )
        })
        .collect();

    let body = match chart_svg {
        Some(svg) if view.history.has_data() => format!(r#"<div class="chart">{}</div>"#, svg),
        _ => r#"<p class="info">Not enough data to show your history yet.</p>"#.to_string(),
    };

    format!(
        r#"<section class="history">
  <h2>📊 History</h2>
  <nav class="tabs">{}</nav>
  {}
</section>"#,
        tabs, body
    )
}

/// Render the full dashboard page
pub fn render_dashboard(
    view: &DashboardView,
    chart_svg: Option<&str>,
    notice: Option<Notice>,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>H2O Habits</title>
<style>{style}</style>
</head>
<body>
{notice}
<header>
  <h1>H2O Habits 💧</h1>
  <p class="subtitle">Turn hydration into a pleasant routine. {today}</p>
</header>
{goal}
{progress}
{add}
{log}
{history}
<section class="tip"><h2>💡 Tip</h2><p>{tip}</p></section>
<footer>Made for your well-being. Drink water. 💧</footer>
</body>
</html>
"#,
        style = STYLE,
        notice = render_notice(notice),
        today = view.today.format("%A, %d/%m"),
        goal = render_goal_section(view),
        progress = render_progress_section(view),
        add = render_add_section(view),
        log = render_today_log(view),
        history = render_history_section(view, chart_svg),
        tip = escape_html(&view.tip),
    )
}
