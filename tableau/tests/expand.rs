use tableau::{Expansion, Form, Mark, Marked, NodeId, Opt, Prover, Rule, Tableau};

fn at(a: char) -> Form {
    Form::Atom(a)
}

/// Return the marked formulas on the branch ending in `leaf`, from the root.
fn branch(tab: &Tableau, leaf: NodeId) -> Vec<String> {
    let mut fms: Vec<_> = tab.branch(leaf).map(|n| n.marked().to_string()).collect();
    fms.reverse();
    fms
}

fn node(tab: &Tableau, i: usize) -> NodeId {
    tab.nodes().nth(i).unwrap().0
}

#[test]
fn rules() {
    let (a, b) = (at('a'), at('b'));
    let rule = |m| Rule::of(&m).unwrap();
    let chain = |ms: Vec<Marked>| Some(Rule::Alpha(ms));

    assert_eq!(rule(Marked::t(-a.clone())), chain(vec![Marked::f(a.clone())]));
    assert_eq!(rule(Marked::f(-a.clone())), chain(vec![Marked::t(a.clone())]));
    let tatb = vec![Marked::t(a.clone()), Marked::t(b.clone())];
    assert_eq!(rule(Marked::t(a.clone() & b.clone())), chain(tatb));
    let fafb = vec![Marked::f(a.clone()), Marked::f(b.clone())];
    assert_eq!(rule(Marked::f(a.clone() | b.clone())), chain(fafb));
    let tafb = vec![Marked::t(a.clone()), Marked::f(b.clone())];
    assert_eq!(rule(Marked::f(Form::imp(a.clone(), b.clone()))), chain(tafb));
    let closer = vec![Marked::t(a.clone()), Marked::closer()];
    assert_eq!(rule(Marked::f(Form::imp(a.clone(), a.clone()))), chain(closer));

    let beta = |l, r| Some(Rule::Beta(l, r));
    let (fa, fb) = (Marked::f(a.clone()), Marked::f(b.clone()));
    assert_eq!(rule(Marked::f(a.clone() & b.clone())), beta(fa.clone(), fb));
    let (ta, tb) = (Marked::t(a.clone()), Marked::t(b.clone()));
    assert_eq!(rule(Marked::t(a.clone() | b.clone())), beta(ta, tb.clone()));
    assert_eq!(rule(Marked::t(Form::imp(a.clone(), b))), beta(fa, tb));

    assert_eq!(rule(Marked::t(a.clone())), None);
    assert_eq!(rule(Marked::closer()), None);
}

#[test]
fn marked() {
    let m = Marked::new(Mark::F, at('p'));
    assert_eq!(m.mark(), Some(Mark::F));
    assert_eq!(m.form(), Some(&at('p')));
    assert_eq!(m.to_string(), "Fp");
    assert_eq!(Marked::closer().mark(), None);
    assert_eq!(Marked::closer().to_string(), "*");
}

#[test]
fn alpha_on_every_branch() {
    // F c, T p # q, T a & b
    let (p, q) = (at('p'), at('q'));
    let tab = vec![at('c'), p | q, at('a') & at('b')];
    let mut tab = Tableau::build(tab).unwrap();

    assert_eq!(tab.expand(node(&tab, 1)), Ok(Expansion::Beta(1)));
    assert_eq!(tab.expand(node(&tab, 2)), Ok(Expansion::Alpha(2)));

    let leaves = tab.leaves(tab.root());
    assert_eq!(leaves.len(), 2);
    for leaf in leaves {
        let fms = branch(&tab, leaf);
        assert!(fms.contains(&"Ta".to_string()));
        assert!(fms.contains(&"Tb".to_string()));
    }
}

#[test]
fn alpha_confined_to_subtree() {
    // T (a & b) # c splits into T a & b and T c;
    // expanding T a & b must not touch the branch of T c
    let fm = (at('a') & at('b')) | at('c');
    let mut tab = Tableau::build(vec![at('d'), fm]).unwrap();
    assert_eq!(tab.expand(node(&tab, 1)), Ok(Expansion::Beta(1)));

    let (left, right) = {
        let n = tab.get(node(&tab, 1)).unwrap();
        (n.left().unwrap(), n.right().unwrap())
    };
    assert_eq!(tab.expand(left), Ok(Expansion::Alpha(1)));

    assert_eq!(tab.leaves(right), vec![right]);
    let leaves = tab.leaves(left);
    assert_eq!(leaves.len(), 1);
    assert_eq!(branch(&tab, leaves[0]), ["Fd", "T(a & b) # c", "Ta & b", "Ta", "Tb"]);
}

#[test]
fn beta_splits_every_open_leaf() {
    // F a & b, T p # q
    let mut tab = Tableau::build(vec![at('a') & at('b'), at('p') | at('q')]).unwrap();
    assert_eq!(tab.expand(node(&tab, 1)), Ok(Expansion::Beta(1)));
    assert_eq!(tab.expand(tab.root()), Ok(Expansion::Beta(2)));

    let leaves = tab.leaves(tab.root());
    assert_eq!(leaves.len(), 4);
    for pair in leaves.chunks(2) {
        let (l, r) = (branch(&tab, pair[0]), branch(&tab, pair[1]));
        assert_eq!(l.last().unwrap(), "Fa");
        assert_eq!(r.last().unwrap(), "Fb");
        assert_eq!(l[..l.len() - 1], r[..r.len() - 1]);
    }
}

#[test]
fn closed_branches_stay_closed() {
    // F p, T p # q, T s & t
    let tab = vec![at('p'), at('p') | at('q'), at('s') & at('t')];
    let mut tab = Tableau::build(tab).unwrap();
    assert_eq!(tab.expand(node(&tab, 1)), Ok(Expansion::Beta(1)));
    assert_eq!(tab.branches(), (2, 1));

    let closer = tab.nodes().find(|(_, n)| n.marked().is_closer()).unwrap().0;
    assert_eq!(tab.expand(node(&tab, 2)), Ok(Expansion::Alpha(1)));
    assert!(tab.get(closer).unwrap().is_leaf());
    assert!(tab.is_closed_at(tab.get(closer).unwrap().parent().unwrap()));
    assert!(!tab.is_closed());
    assert_eq!(tab.branches(), (2, 1));
}

#[test]
fn expand_once() {
    let mut tab = Tableau::build(vec![at('a') & at('b')]).unwrap();
    assert_eq!(tab.expand(tab.root()), Ok(Expansion::Beta(1)));
    let len = tab.len();
    assert_eq!(tab.expand(tab.root()), Ok(Expansion::Repeated));
    assert_eq!(tab.len(), len);
    let leaf = tab.leaves(tab.root())[0];
    assert_eq!(tab.expand(leaf), Ok(Expansion::Terminal));
    assert!(tab.get(leaf).unwrap().is_expanded());
}

#[test]
fn invalid_target() {
    let big = Tableau::build(vec![at('a'), at('b'), at('c')]).unwrap();
    let stale = node(&big, 2);
    let mut tab = Tableau::build(vec![at('a')]).unwrap();
    assert_eq!(
        tab.expand(stale),
        Err(tableau::Error::InvalidExpansionTarget(stale))
    );

    let mut prover = Prover::new(tab, Opt::default());
    assert_eq!(prover.step(stale), Ok(None));
    assert_eq!(prover.prove(), Ok(false));
}

#[test]
fn saturation() {
    let mut prover = Prover::new(Tableau::build(vec![at('a') | at('b')]).unwrap(), Opt::default());
    assert_eq!(prover.select(), Some(prover.tableau().root()));
    assert_eq!(prover.prove(), Ok(false));
    assert_eq!(prover.select(), None);
    let lines: Vec<_> = prover.tableau().lines().collect();
    assert_eq!(lines.iter().map(|(depth, _)| *depth).max(), Some(0));
    assert_eq!(lines.len(), 3);
}
