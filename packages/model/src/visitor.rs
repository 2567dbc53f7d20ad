use crate::component::Component;
use crate::screen::Screen;

/// Visitor pattern for traversing component trees immutably
///
/// The default implementations walk the entire tree. Override specific
/// visit_* methods to act on nodes.
pub trait Visitor: Sized {
    fn visit_screen(&mut self, screen: &Screen) {
        walk_screen(self, screen);
    }

    fn visit_component(&mut self, component: &Component) {
        walk_component(self, component);
    }
}

/// Mutable visitor pattern for transforming component trees
///
/// Similar to Visitor, but provides mutable access to nodes.
pub trait VisitorMut: Sized {
    fn visit_screen_mut(&mut self, screen: &mut Screen) {
        walk_screen_mut(self, screen);
    }

    fn visit_component_mut(&mut self, component: &mut Component) {
        walk_component_mut(self, component);
    }
}

pub fn walk_screen<V: Visitor>(visitor: &mut V, screen: &Screen) {
    visitor.visit_component(&screen.props);
}

pub fn walk_component<V: Visitor>(visitor: &mut V, component: &Component) {
    for child in component.children() {
        visitor.visit_component(child);
    }
}

pub fn walk_screen_mut<V: VisitorMut>(visitor: &mut V, screen: &mut Screen) {
    visitor.visit_component_mut(&mut screen.props);
}

pub fn walk_component_mut<V: VisitorMut>(visitor: &mut V, component: &mut Component) {
    // Leaf nodes have no sequence to walk
    if let Some(children) = component.children.as_mut() {
        for child in children {
            visitor.visit_component_mut(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TypeCounter {
        containers: usize,
    }

    impl Visitor for TypeCounter {
        fn visit_component(&mut self, component: &Component) {
            if component.component == "container" {
                self.containers += 1;
            }
            walk_component(self, component);
        }
    }

    struct Renamer;

    impl VisitorMut for Renamer {
        fn visit_component_mut(&mut self, component: &mut Component) {
            component.instance_name = Some(format!("{} instance", component.component));
            walk_component_mut(self, component);
        }
    }

    fn tree() -> Component {
        Component::new("container")
            .with_id("root")
            .with_child(Component::new("container").with_id("inner"))
            .with_child(Component::new("text").with_id("leaf"))
    }

    #[test]
    fn test_visitor_walks_whole_tree() {
        let mut counter = TypeCounter { containers: 0 };
        counter.visit_component(&tree());
        assert_eq!(counter.containers, 2);
    }

    #[test]
    fn test_visitor_mut_reaches_every_node() {
        let mut screen = Screen::new("s1", "/home").with_props(tree());
        Renamer.visit_screen_mut(&mut screen);

        let leaf = screen.props.find_by_id("leaf").unwrap();
        assert_eq!(leaf.instance_name.as_deref(), Some("text instance"));
        assert_eq!(
            screen.props.instance_name.as_deref(),
            Some("container instance")
        );
    }
}
