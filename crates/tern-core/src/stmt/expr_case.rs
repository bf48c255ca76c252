use super::{Expr, Type};

/// Number of WHEN branches a fresh [`CaseBuilder`] has room for.
const INITIAL_CAPACITY: usize = 2;

/// A searched CASE expression.
///
/// ```text
/// CASE WHEN c1 THEN r1 WHEN c2 THEN r2 ... ELSE e END
/// ```
///
/// Branches are evaluated in order and the first condition that evaluates
/// to `true` selects its result. A condition evaluating to `NULL` does not
/// match. Without a matching branch the `ELSE` result is returned, or `NULL`
/// when there is none.
///
/// An `ExprCase` is produced by [`CaseBuilder::finalize`] and cannot be
/// restructured afterwards. Tree rewrites go through [`VisitMut`], or take
/// the node apart with [`ExprCase::into_parts`] and build a new one.
///
/// [`VisitMut`]: super::VisitMut
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCase {
    pub(crate) whens: Vec<CaseWhen>,
    pub(crate) else_expr: Option<Box<Expr>>,

    /// Unified type of all branch results, set once the node has been
    /// simplified.
    pub(crate) ty: Option<Type>,
}

/// A single `WHEN <condition> THEN <result>` branch.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseWhen {
    pub condition: Expr,
    pub result: Expr,
}

/// Accumulates the branches of a CASE expression while it is being built.
#[derive(Debug)]
pub struct CaseBuilder {
    whens: Vec<CaseWhen>,
    else_expr: Option<Box<Expr>>,
}

impl CaseBuilder {
    pub fn new() -> CaseBuilder {
        CaseBuilder {
            whens: Vec::with_capacity(INITIAL_CAPACITY),
            else_expr: None,
        }
    }

    /// Appends a `WHEN condition THEN result` branch.
    ///
    /// All branches must be added before the `ELSE` branch.
    pub fn add_when(&mut self, condition: impl Into<Expr>, result: impl Into<Expr>) -> &mut Self {
        debug_assert!(
            self.else_expr.is_none(),
            "WHEN branch added after the ELSE branch"
        );

        // Grow by doubling rather than leaving it to `Vec`, so the growth
        // policy does not depend on the allocator strategy.
        if self.whens.len() == self.whens.capacity() {
            let additional = self.whens.capacity().max(INITIAL_CAPACITY);
            self.whens.reserve_exact(additional);
        }

        self.whens.push(CaseWhen {
            condition: condition.into(),
            result: result.into(),
        });
        self
    }

    /// Sets the `ELSE` branch. May be called at most once, after every
    /// `WHEN` branch.
    pub fn add_else(&mut self, result: impl Into<Expr>) -> &mut Self {
        debug_assert!(self.else_expr.is_none(), "ELSE branch added twice");
        self.else_expr = Some(Box::new(result.into()));
        self
    }

    /// Number of occupied slots: two per WHEN branch plus one for `ELSE`.
    pub fn len(&self) -> usize {
        slots(&self.whens, &self.else_expr)
    }

    pub fn is_empty(&self) -> bool {
        self.whens.is_empty() && self.else_expr.is_none()
    }

    /// Number of WHEN branches that fit before the storage grows.
    pub fn capacity(&self) -> usize {
        self.whens.capacity()
    }

    /// Completes construction, trimming storage to the branches added.
    pub fn finalize(mut self) -> ExprCase {
        self.whens.shrink_to_fit();

        ExprCase {
            whens: self.whens,
            else_expr: self.else_expr,
            ty: None,
        }
    }

    /// Completes construction and records `ty` as the result type.
    pub fn finalize_with_ty(self, ty: Type) -> ExprCase {
        let mut expr = self.finalize();
        expr.ty = Some(ty);
        expr
    }
}

impl Default for CaseBuilder {
    fn default() -> Self {
        CaseBuilder::new()
    }
}

impl ExprCase {
    /// Number of occupied slots: two per WHEN branch plus one for `ELSE`.
    pub fn len(&self) -> usize {
        slots(&self.whens, &self.else_expr)
    }

    pub fn is_empty(&self) -> bool {
        self.whens.is_empty() && self.else_expr.is_none()
    }

    pub fn whens(&self) -> &[CaseWhen] {
        &self.whens
    }

    pub fn else_expr(&self) -> Option<&Expr> {
        self.else_expr.as_deref()
    }

    pub fn has_else(&self) -> bool {
        self.else_expr.is_some()
    }

    /// The unified result type, available once the node has been simplified.
    pub fn result_ty(&self) -> Option<Type> {
        self.ty
    }

    /// Iterates all sub-expressions in branch order:
    /// `c1, r1, c2, r2, ..., else`.
    pub fn iter(&self) -> impl Iterator<Item = &Expr> + '_ {
        self.whens
            .iter()
            .flat_map(|when| [&when.condition, &when.result])
            .chain(self.else_expr.as_deref())
    }

    /// Consumes the node, returning its branches and `ELSE` result.
    pub fn into_parts(self) -> (Vec<CaseWhen>, Option<Expr>) {
        (self.whens, self.else_expr.map(|expr| *expr))
    }
}

impl Expr {
    /// Builds a finalized searched CASE from `(condition, result)` pairs.
    pub fn case<C, R>(whens: impl IntoIterator<Item = (C, R)>, else_expr: Option<Expr>) -> Self
    where
        C: Into<Expr>,
        R: Into<Expr>,
    {
        let mut builder = CaseBuilder::new();

        for (condition, result) in whens {
            builder.add_when(condition, result);
        }

        if let Some(else_expr) = else_expr {
            builder.add_else(else_expr);
        }

        builder.finalize().into()
    }
}

impl From<ExprCase> for Expr {
    fn from(value: ExprCase) -> Self {
        Self::Case(value)
    }
}

fn slots(whens: &[CaseWhen], else_expr: &Option<Box<Expr>>) -> usize {
    whens.len() * 2 + usize::from(else_expr.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_starts_small() {
        let builder = CaseBuilder::new();
        assert_eq!(builder.capacity(), INITIAL_CAPACITY);
        assert!(builder.is_empty());
    }

    #[test]
    fn capacity_doubles_when_full() {
        let mut builder = CaseBuilder::new();
        let mut seen = vec![];

        for i in 0..9i64 {
            builder.add_when(true, i);
            seen.push(builder.capacity());
        }

        // Capacity only ever grows by doubling from the initial size.
        for cap in seen {
            assert!(cap.is_power_of_two(), "capacity {cap} is not a doubling");
            assert!(cap >= INITIAL_CAPACITY);
        }
        assert!(builder.capacity() >= 9);
    }

    #[test]
    fn finalize_trims_storage() {
        let mut builder = CaseBuilder::new();
        for i in 0..3i64 {
            builder.add_when(false, i);
        }
        assert!(builder.capacity() > 3);

        let expr = builder.finalize();
        assert_eq!(expr.whens.capacity(), 3);
        assert_eq!(expr.len(), 6);
        assert_eq!(expr.result_ty(), None);
    }

    #[test]
    fn slot_count_includes_else() {
        let mut builder = CaseBuilder::new();
        builder.add_when(true, 1i64).add_when(false, 2i64);
        assert_eq!(builder.len(), 4);

        builder.add_else(3i64);
        assert_eq!(builder.len(), 5);

        let expr = builder.finalize();
        assert_eq!(expr.len(), 5);
        assert!(expr.has_else());
    }

    #[test]
    fn iter_preserves_branch_order() {
        let expr = Expr::case([(true, 1i64), (false, 2i64)], Some(Expr::from(3i64))).unwrap_case();

        let items: Vec<_> = expr.iter().cloned().collect();
        assert_eq!(
            items,
            vec![
                Expr::from(true),
                Expr::from(1i64),
                Expr::from(false),
                Expr::from(2i64),
                Expr::from(3i64),
            ]
        );
    }

    #[test]
    fn empty_case_has_no_slots() {
        let expr = CaseBuilder::new().finalize();
        assert!(expr.is_empty());
        assert_eq!(expr.len(), 0);
        assert_eq!(expr.else_expr(), None);
    }

    #[test]
    #[should_panic(expected = "ELSE branch added twice")]
    #[cfg(debug_assertions)]
    fn else_added_twice_is_rejected_in_debug() {
        let mut builder = CaseBuilder::new();
        builder.add_else(1i64).add_else(2i64);
    }
}
