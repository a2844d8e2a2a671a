use std::fmt::Write as _;

use ledger::profile::ProfileOverview;
use model::profile::{MakeupGroup, PaymentInfo, PaymentStatus};

pub fn fmt_payment_status(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pending => "🟠 awaiting payment",
        PaymentStatus::Paid => "✅ paid",
        PaymentStatus::Overdue => "⛔ overdue",
    }
}

pub fn fmt_payment(payment: &PaymentInfo) -> String {
    format!(
        "{}: {} RUB due {} ({})",
        payment.description,
        payment.amount,
        payment.due_date,
        fmt_payment_status(payment.status)
    )
}

pub fn fmt_makeup_group(group: &MakeupGroup) -> String {
    let spots = if group.has_spots() {
        format!("{}/{} spots", group.available_spots, group.total_spots)
    } else {
        "no spots".to_owned()
    };
    format!(
        "{} {} {} · {} · {} · {}",
        group.date, group.time, group.name, group.location, group.trainer, spots
    )
}

pub fn render_profile(overview: &ProfileOverview) -> String {
    let profile = &overview.profile;
    let mut out = format!("{} ({}) · {}\n", profile.name, profile.role, profile.email);
    let _ = writeln!(
        out,
        "Attendance: {}% of {} sessions",
        overview.attendance_rate,
        overview.attendance.len()
    );
    for record in &overview.attendance {
        let mark = if record.attended { "✅" } else { "❌" };
        match &record.note {
            Some(note) => {
                let _ = writeln!(out, "  {} {} {}", mark, record.date, note);
            }
            None => {
                let _ = writeln!(out, "  {} {}", mark, record.date);
            }
        }
    }
    out.push_str("Makeup groups:\n");
    for group in &overview.makeup_groups {
        let _ = writeln!(out, "  {}", fmt_makeup_group(group));
    }
    let _ = writeln!(out, "Payment: {}", fmt_payment(&overview.payment));
    if let Some(stats) = &overview.admin_stats {
        let _ = writeln!(
            out,
            "Club: {} members, {} active, {}% attendance, {} payments due",
            stats.total_members,
            stats.active_members,
            stats.attendance_rate,
            stats.upcoming_payments
        );
        for group in &stats.groups {
            let _ = writeln!(
                out,
                "  {} · {} members · {}% · {}",
                group.name, group.member_count, group.attendance_rate, group.trainer
            );
        }
    }
    out
}
