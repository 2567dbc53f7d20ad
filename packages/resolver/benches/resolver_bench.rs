use criterion::{black_box, criterion_group, criterion_main, Criterion};
use screenkit_model::{
    AppState, BuilderSession, Component, DragSource, DragState, ResolverInputs, RouteState, Screen,
};
use screenkit_resolver::ScreenResolver;

/// Root container with `width` sections of `depth` nested containers each
fn deep_tree(prefix: &str, width: usize, depth: usize) -> Component {
    let mut root = Component::new("container").with_id(format!("{}-root", prefix));
    for section in 0..width {
        let mut node = Component::new("text").with_id(format!("{}-{}-leaf", prefix, section));
        for level in (0..depth).rev() {
            node = Component::new("container")
                .with_id(format!("{}-{}-{}", prefix, section, level))
                .with_child(node);
        }
        root = root.with_child(node);
    }
    root
}

fn app_with_screens(count: usize) -> AppState {
    let roles = ["ADMIN", "POWER", "BASIC", "PUBLIC"];
    let screens = (0..count)
        .map(|i| {
            let screen = Screen::new(format!("screen_{}", i), format!("/page/{}", i))
                .with_role(roles[i % roles.len()])
                .with_navigation(true)
                .with_props(deep_tree(&format!("s{}", i), 4, 4));
            if i == count / 2 {
                screen.as_home_screen()
            } else {
                screen
            }
        })
        .collect();

    AppState {
        screens,
        ..Default::default()
    }
}

fn resolve_routed_app(c: &mut Criterion) {
    let inputs = ResolverInputs {
        app: app_with_screens(200),
        route: RouteState::to_screen("screen_17"),
        ..Default::default()
    };
    let resolver = ScreenResolver::default();

    c.bench_function("resolve_routed_200_screens", |b| {
        b.iter(|| resolver.resolve(black_box(&inputs)))
    });
}

fn resolve_drag_preview(c: &mut Criterion) {
    let mut builder = BuilderSession::previewing(
        Screen::new("draft", "/draft").with_props(deep_tree("draft", 20, 8)),
    );
    builder.selected_component_id = Some("draft-3-leaf".to_string());

    let inputs = ResolverInputs {
        app: app_with_screens(50),
        builder,
        dnd: DragState {
            parent: Some("draft-12-7".to_string()),
            index: Some(0),
            source: Some(DragSource::default()),
        },
        ..Default::default()
    };
    let resolver = ScreenResolver::default();

    c.bench_function("resolve_drag_preview", |b| {
        b.iter(|| resolver.resolve(black_box(&inputs)))
    });
}

criterion_group!(benches, resolve_routed_app, resolve_drag_preview);
criterion_main!(benches);
