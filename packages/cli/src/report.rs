use colored::Colorize;
use screenkit_model::Screen;
use screenkit_resolver::ResolvedScreens;

/// Human-readable view of a resolution
pub fn print_summary(resolved: &ResolvedScreens) {
    match &resolved.active_screen {
        Some(screen) => println!(
            "{} {} {}",
            "Active screen:".bright_white().bold(),
            screen.id.green(),
            format!("({})", screen.routing.route).dimmed()
        ),
        None => println!("{} {}", "Active screen:".bright_white().bold(), "none".yellow()),
    }

    let settings = resolved.active_layout.settings();
    let navigation = settings
        .navigation
        .map(|kind| format!("{:?}", kind))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{} {} {}",
        "Layout:".bright_white().bold(),
        resolved.active_layout.id,
        format!(
            "(navigation {}, width {})",
            navigation,
            settings.page_width.as_deref().unwrap_or("-")
        )
        .dimmed()
    );

    if resolved.is_grid_screen() {
        println!("{} grid", "Mode:".bright_white().bold());
    }

    println!();
    print_ranked(&resolved.screens, resolved.active_screen.as_ref());
}

/// One line per screen, best first
pub fn print_ranked(screens: &[Screen], active: Option<&Screen>) {
    println!(
        "{} {}",
        "Screens".bright_white().bold(),
        format!("({})", screens.len()).dimmed()
    );

    for screen in screens {
        let rank = screen
            .rank
            .map(|rank| rank.to_string())
            .unwrap_or_else(|| "-".to_string());
        let marker = if active.map_or(false, |a| a.id == screen.id) {
            "▶".green().to_string()
        } else {
            " ".to_string()
        };
        let home = if screen.routing.home_screen {
            "home".cyan().to_string()
        } else {
            String::new()
        };

        println!(
            "  {} {:>5}  {:<24} {} {}",
            marker,
            rank,
            screen.routing.route,
            screen.id.dimmed(),
            home
        );
    }
}
