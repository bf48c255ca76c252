use super::VisitMut;
use std::fmt;

pub trait Node: fmt::Debug {
    fn visit_mut<V: VisitMut>(&mut self, visit: V);
}

impl<T: Node> Node for Option<T> {
    fn visit_mut<V: VisitMut>(&mut self, visit: V) {
        if let Some(node) = self {
            node.visit_mut(visit);
        }
    }
}

impl<T: Node> Node for &mut T {
    fn visit_mut<V: VisitMut>(&mut self, visit: V) {
        (**self).visit_mut(visit)
    }
}

impl<T: Node> Node for Vec<T> {
    fn visit_mut<V: VisitMut>(&mut self, mut visit: V) {
        for node in self {
            node.visit_mut(&mut visit);
        }
    }
}
