// Plain terminal rendering of workouts and summaries

use colored::Colorize;

use workout_nlp::{
    adjusted_distance, cardio_icon, cardio_multiplier_text, CardioSummary, LogEntry, Workout,
};

/// Short measurements of a workout, e.g. "80kg · 4세트 · 8회"
pub fn workout_details(workout: &Workout) -> String {
    let mut parts = Vec::new();

    if let Some(weight) = workout.weight_kg {
        parts.push(format!("{}kg", weight));
    }
    if let Some(sets) = workout.sets {
        parts.push(format!("{}세트", sets));
    }
    if let Some(reps) = workout.reps {
        parts.push(format!("{}회", reps));
    }
    if let Some(distance) = workout.distance_km {
        parts.push(format!("{:.2}km", distance));
    }
    if let Some(minutes) = workout.duration_min {
        parts.push(format!("{}분", minutes));
    }
    if let Some(pace) = &workout.pace {
        parts.push(format!("페이스 {}", pace));
    }
    if let Some(speed) = workout.speed_kph {
        parts.push(format!("시속 {}km", speed));
    }
    if let Some(incline) = workout.incline_percent {
        parts.push(format!("경사 {}%", incline));
    }
    if let Some(level) = workout.resistance_level {
        parts.push(format!("레벨 {}", level));
    }

    parts.join(" · ")
}

/// Taxonomy tags, e.g. "gym/strength/lower"
pub fn workout_tags(workout: &Workout) -> String {
    match workout.target {
        Some(target) => format!("{}/{}/{}", workout.category, workout.workout_type, target),
        None => format!("{}/{}", workout.category, workout.workout_type),
    }
}

/// Adjusted distance line for cardio workouts that have a distance
pub fn adjusted_line(workout: &Workout) -> Option<String> {
    if !workout.is_cardio() || workout.distance_km.is_none() {
        return None;
    }

    let adjusted = adjusted_distance(workout.distance_km, None, &workout.name);
    let multiplier = cardio_multiplier_text(&workout.name);
    if multiplier.is_empty() {
        Some(format!("{} {:.2}km", cardio_icon(&workout.name), adjusted))
    } else {
        Some(format!(
            "{} {:.2}km ({})",
            cardio_icon(&workout.name),
            adjusted,
            multiplier
        ))
    }
}

pub fn print_workouts(workouts: &[Workout], show_adjusted: bool) {
    for (i, workout) in workouts.iter().enumerate() {
        println!(
            "{:>2}. {} {}",
            i + 1,
            workout.name.bold(),
            format!("[{}]", workout_tags(workout)).dimmed()
        );

        let details = workout_details(workout);
        if !details.is_empty() {
            println!("    {}", details);
        }
        if show_adjusted {
            if let Some(line) = adjusted_line(workout) {
                println!("    {}", line.cyan());
            }
        }
        if let Some(note) = &workout.note {
            println!("    {}", format!("메모: {}", note).yellow());
        }
    }
}

pub fn print_entry_header(entry: &LogEntry) {
    println!(
        "{}  {}  {}",
        entry.date.to_string().green(),
        entry.id.dimmed(),
        entry.raw_text
    );
}

pub fn print_cardio_summary(summary: &CardioSummary) {
    if summary.is_empty() {
        println!("No cardio workouts in this period");
        return;
    }

    println!("{}", "Cardio".bold());
    for (category, totals) in &summary.by_category {
        let multiplier = category.multiplier_text();
        println!(
            "  {} {:<10} {:>3} sessions  {:>7.2}km raw  {:>7.2}km adjusted {}  {:>4} min",
            category.icon(),
            category.label(),
            totals.sessions,
            totals.raw_km,
            totals.adjusted_km,
            multiplier,
            totals.minutes
        );
    }
    println!(
        "  {} {:.2}km raw, {:.2}km adjusted, {} min",
        "Total:".bold(),
        summary.total_raw_km,
        summary.total_adjusted_km,
        summary.total_minutes
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use workout_nlp::parse_text;

    #[test]
    fn test_workout_details() {
        let workouts = parse_text("스쿼트 80kg 4세트 8회");
        assert_eq!(workout_details(&workouts[0]), "80kg · 4세트 · 8회");
        assert_eq!(workout_tags(&workouts[0]), "gym/strength/lower");
    }

    #[test]
    fn test_adjusted_line_only_for_cardio_with_distance() {
        let workouts = parse_text("사이클 10km 30분, 러닝 5km, 러닝 30분, 스쿼트 5세트");
        assert_eq!(adjusted_line(&workouts[0]).as_deref(), Some("🚴 4.00km (×0.4)"));
        assert_eq!(adjusted_line(&workouts[1]).as_deref(), Some("🏃 5.00km"));
        assert_eq!(adjusted_line(&workouts[2]), None);
        assert_eq!(adjusted_line(&workouts[3]), None);
    }
}
