use crate::graph_spec::{Edge, GraphSpec, Node};
use crate::viewport::{Bounds, ViewportState};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HitTarget {
    Node(String),
    /// Index into [`GraphSpec::edges`].
    Edge(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickTarget<'a> {
    Node(&'a str, &'a Node),
    Edge(&'a Edge),
}

#[derive(Debug, Clone, Default)]
pub struct HitMap {
    // paint order; later entries are drawn on top
    entries: Vec<(HitTarget, Bounds)>,
}

impl HitMap {
    pub fn bounds_of(&self, target: &HitTarget) -> Option<Bounds> {
        self.entries
            .iter()
            .rev()
            .find(|(t, _)| t == target)
            .map(|(_, b)| *b)
    }

    pub fn at_content_point(&self, x: f64, y: f64) -> Option<&HitTarget> {
        self.entries
            .iter()
            .rev()
            .find(|(_, bounds)| bounds.contains(x, y))
            .map(|(target, _)| target)
    }

    /// Topmost element under a client-space pointer position.
    pub fn hit_test(
        &self,
        state: &ViewportState,
        container: &Bounds,
        client_x: f64,
        client_y: f64,
    ) -> Option<&HitTarget> {
        let (x, y) = state.screen_to_content(client_x - container.x, client_y - container.y);
        self.at_content_point(x, y)
    }
}

impl FromIterator<(HitTarget, Bounds)> for HitMap {
    fn from_iter<I: IntoIterator<Item = (HitTarget, Bounds)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl GraphSpec {
    pub fn click_target(&self, target: &HitTarget) -> Option<ClickTarget<'_>> {
        match target {
            HitTarget::Node(id) => self
                .node(id)
                .map(|node| ClickTarget::Node(node.id.as_str(), node)),
            HitTarget::Edge(index) => self.edges.get(*index).map(ClickTarget::Edge),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> HitMap {
        [
            (HitTarget::Node("A".into()), Bounds::new(0.0, 0.0, 100.0, 40.0)),
            (HitTarget::Edge(0), Bounds::new(45.0, 40.0, 10.0, 60.0)),
            (HitTarget::Node("B".into()), Bounds::new(0.0, 100.0, 100.0, 40.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn miss_returns_none() {
        assert_eq!(map().at_content_point(500.0, 500.0), None);
    }

    #[test]
    fn topmost_wins_on_overlap() {
        // (50, 40) is on A's bottom edge and inside the edge's box
        assert_eq!(map().at_content_point(50.0, 40.0), Some(&HitTarget::Edge(0)));
    }

    #[test]
    fn pointer_goes_through_inverse_transform() {
        let state = ViewportState {
            scale: 2.0,
            translate_x: 100.0,
            translate_y: 0.0,
            ..ViewportState::default()
        };
        let container = Bounds::new(10.0, 10.0, 800.0, 600.0);
        // client (310, 230) -> container (300, 220) -> content (100, 110)
        let hits = map();
        let hit = hits.hit_test(&state, &container, 310.0, 230.0);
        assert_eq!(hit, Some(&HitTarget::Node("B".into())));
    }

    #[test]
    fn click_target_resolves_payload() {
        let spec = GraphSpec::new(
            vec![Node::new("A", "Start"), Node::new("B", "End")],
            vec![Edge::new("A", "B").with_label("go")],
        );
        match spec.click_target(&HitTarget::Node("B".into())) {
            Some(ClickTarget::Node(id, node)) => {
                assert_eq!(id, "B");
                assert_eq!(node.label, "End");
            }
            other => panic!("unexpected {other:?}"),
        }
        match spec.click_target(&HitTarget::Edge(0)) {
            Some(ClickTarget::Edge(edge)) => assert_eq!(edge.label.as_deref(), Some("go")),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(spec.click_target(&HitTarget::Edge(3)), None);
        assert_eq!(spec.click_target(&HitTarget::Node("Z".into())), None);
    }

    #[test]
    fn bounds_lookup() {
        assert_eq!(
            map().bounds_of(&HitTarget::Node("A".into())),
            Some(Bounds::new(0.0, 0.0, 100.0, 40.0))
        );
        assert_eq!(map().bounds_of(&HitTarget::Edge(7)), None);
    }
}
