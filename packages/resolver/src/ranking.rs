//! # Screen Ranking
//!
//! `rank = role priority + (home screen ? home bonus : 0)`, sorted by rank
//! descending, then route ascending. The sort is stable: screens with equal
//! rank and identical routes keep their input order.

use crate::roles::RolePriority;
use screenkit_model::Screen;
use std::cmp::Ordering;

pub fn screen_rank<R>(screen: &Screen, roles: &R, home_screen_bonus: i32) -> i32
where
    R: RolePriority + ?Sized,
{
    let rank = roles.priority(&screen.routing.role_id);
    if screen.routing.home_screen {
        rank.saturating_add(home_screen_bonus)
    } else {
        rank
    }
}

/// Assign a rank to every screen, then sort so the best screen is first
pub fn rank_screens<R>(screens: &mut [Screen], roles: &R, home_screen_bonus: i32)
where
    R: RolePriority + ?Sized,
{
    for screen in screens.iter_mut() {
        screen.rank = Some(screen_rank(screen, roles, home_screen_bonus));
    }
    screens.sort_by(compare_ranked);
}

/// Higher rank first; equal ranks by ascending route
pub fn compare_ranked(a: &Screen, b: &Screen) -> Ordering {
    b.rank
        .cmp(&a.rank)
        .then_with(|| a.routing.route.cmp(&b.routing.route))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::RoleTable;

    fn screen(id: &str, route: &str, role: &str, home: bool) -> Screen {
        let screen = Screen::new(id, route).with_role(role);
        if home {
            screen.as_home_screen()
        } else {
            screen
        }
    }

    fn order(screens: &[Screen]) -> Vec<&str> {
        screens.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_home_screen_bonus() {
        let roles = |_: &str| 10;
        let mut screens = vec![screen("s1", "/a", "BASIC", false), screen("s2", "/b", "BASIC", true)];

        rank_screens(&mut screens, &roles, 100);

        assert_eq!(order(&screens), vec!["s2", "s1"]);
        assert_eq!(screens[0].rank, Some(110));
        assert_eq!(screens[1].rank, Some(10));
    }

    #[test]
    fn test_higher_role_first() {
        let roles = RoleTable::builtin();
        let mut screens = vec![
            screen("public", "/a", "PUBLIC", false),
            screen("admin", "/z", "ADMIN", false),
            screen("basic", "/m", "BASIC", false),
        ];

        rank_screens(&mut screens, &roles, 100);
        assert_eq!(order(&screens), vec!["admin", "basic", "public"]);
    }

    #[test]
    fn test_home_screen_beats_any_builtin_role() {
        let roles = RoleTable::builtin();
        let mut screens = vec![
            screen("admin", "/admin", "ADMIN", false),
            screen("home", "/", "PUBLIC", true),
        ];

        rank_screens(&mut screens, &roles, 100);
        assert_eq!(order(&screens), vec!["home", "admin"]);
    }

    #[test]
    fn test_equal_rank_sorted_by_route() {
        let roles = RoleTable::builtin();
        let mut screens = vec![
            screen("c", "/orders", "BASIC", false),
            screen("a", "/customers", "BASIC", false),
            screen("b", "/invoices", "BASIC", false),
        ];

        rank_screens(&mut screens, &roles, 100);
        assert_eq!(order(&screens), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_routes_keep_input_order() {
        let roles = RoleTable::builtin();
        let mut screens = vec![
            screen("second", "/same", "BASIC", false),
            screen("first", "/same", "BASIC", false),
        ];

        rank_screens(&mut screens, &roles, 100);
        assert_eq!(order(&screens), vec!["second", "first"]);
    }

    #[test]
    fn test_bonus_saturates() {
        let roles = |_: &str| i32::MAX;
        let home = screen("home", "/", "ANY", true);
        assert_eq!(screen_rank(&home, &roles, 100), i32::MAX);
    }
}
