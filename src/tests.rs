use petgraph::stable_graph::{EdgeIndex, NodeIndex};

use crate::bond::BondOrder::*;
use crate::electrons::electron_balance;
use crate::fixtures::{build, carbon_chain};
use crate::hydrogen::make_hydrogens_explicit;
use crate::*;

fn n(i: usize) -> NodeIndex {
    NodeIndex::new(i)
}

fn run(rule: RuleId, mol: Molecule) -> ReactionSet {
    Reaction::new(rule).initiate(&[mol], &[]).unwrap()
}

fn product_sizes(record: &ReactionRecord) -> Vec<usize> {
    record.products().iter().map(|p| p.atom_count()).collect()
}

fn total_charge(mol: &Molecule) -> i32 {
    mol.atoms().map(|i| mol.atom(i).formal_charge as i32).sum()
}

// --- graph basics ---

#[test]
fn mol_add_atoms_and_bonds() {
    let mut mol = Molecule::new();
    let c = mol.add_atom(Atom::new(Element::C));
    let o = mol.add_atom(Atom::new(Element::O));
    let bond_idx = mol.add_bond(c, o, Bond::new(BondOrder::Double));

    assert_eq!(mol.atom_count(), 2);
    assert_eq!(mol.bond_count(), 1);
    assert_eq!(mol.atom(c).atomic_num, 6);
    assert_eq!(mol.atom(o).atomic_num, 8);
    assert_eq!(mol.bond(bond_idx).order, BondOrder::Double);
}

#[test]
fn mol_incident_bonds_ascending() {
    let mut mol = Molecule::new();
    let a = mol.add_atom(Atom::new(Element::C));
    let b = mol.add_atom(Atom::new(Element::C));
    let c = mol.add_atom(Atom::new(Element::C));
    let e0 = mol.add_bond(b, a, Bond::default());
    let e1 = mol.add_bond(a, c, Bond::default());

    assert_eq!(mol.bonds_of(a).collect::<Vec<_>>(), vec![e0, e1]);
    assert_eq!(mol.neighbors(a).collect::<Vec<_>>(), vec![b, c]);
    assert_eq!(mol.other_end(e0, a), Some(b));
    assert_eq!(mol.other_end(e0, c), None);
}

#[test]
fn mol_remove_bond_keeps_other_indices() {
    let mut mol = carbon_chain(4, None);
    let removed = mol.remove_bond(EdgeIndex::new(1));
    assert!(removed.is_some());
    assert_eq!(mol.bond_count(), 2);
    assert!(!mol.contains_bond(EdgeIndex::new(1)));
    assert_eq!(mol.bond_endpoints(EdgeIndex::new(2)), Some((n(2), n(3))));
    assert_eq!(mol.bonds().collect::<Vec<_>>(), vec![EdgeIndex::new(0), EdgeIndex::new(2)]);
}

#[test]
fn mol_equality_ignores_endpoint_order() {
    let mut a = Molecule::new();
    let mut b = Molecule::new();
    for mol in [&mut a, &mut b] {
        mol.add_atom(Atom::new(Element::C));
        mol.add_atom(Atom::new(Element::O));
    }
    a.add_bond(n(0), n(1), Bond::default());
    b.add_bond(n(1), n(0), Bond::default());
    assert_eq!(a, b);
    b.bond_mut(EdgeIndex::new(0)).order = BondOrder::Double;
    assert_ne!(a, b);
}

// --- one scenario per rule ---

#[test]
fn heterolysis_of_single_bond_goes_both_ways() {
    let set = run(
        RuleId::HeterolyticCleavageSb,
        build(&[("C", 3, 0, 0), ("Cl", 0, 0, 0)], &[(0, 1, Single)]),
    );
    assert_eq!(set.len(), 2);
    let first = &set[0];
    assert_eq!(product_sizes(first), vec![1, 1]);
    assert_eq!(first.products()[0].atom(n(0)).formal_charge, 1);
    assert_eq!(first.products()[1].atom(n(0)).formal_charge, -1);
    assert_eq!(first.products()[1].atom(n(0)).lone_pairs, 4);
}

#[test]
fn heterolysis_of_carbonyl_mirror_images() {
    let set = run(
        RuleId::HeterolyticCleavagePb,
        build(&[("C", 2, 0, 0), ("O", 0, 0, 0)], &[(0, 1, Double)]),
    );
    assert_eq!(set.len(), 2);
    let charges = |r: &ReactionRecord| {
        let p = &r.products()[0];
        (p.atom(n(0)).formal_charge, p.atom(n(1)).formal_charge)
    };
    assert_eq!(charges(&set[0]), (1, -1));
    assert_eq!(charges(&set[1]), (-1, 1));
}

#[test]
fn ionization_of_lone_pair() {
    let set = run(
        RuleId::ElectronImpactNbe,
        build(&[("C", 3, 0, 0), ("O", 1, 0, 0)], &[(0, 1, Single)]),
    );
    assert_eq!(set.len(), 1);
    let o = set[0].products()[0].atom(n(1)).clone();
    assert_eq!((o.formal_charge, o.lone_pairs, o.single_electrons), (1, 1, 1));
}

#[test]
fn ionization_of_pi_bond() {
    let set = run(
        RuleId::ElectronImpactPdb,
        build(&[("C", 2, 0, 0), ("C", 2, 0, 0)], &[(0, 1, Double)]),
    );
    assert_eq!(set.len(), 2);
    let p = &set[0].products()[0];
    assert_eq!(p.bond(EdgeIndex::new(0)).order, Single);
    assert_eq!(p.atom(n(0)).formal_charge, 1);
    assert_eq!(p.atom(n(1)).single_electrons, 1);
}

#[test]
fn ionization_of_sigma_bond() {
    let set = run(RuleId::ElectronImpactSdb, carbon_chain(2, None));
    assert_eq!(set.len(), 2);
    assert_eq!(product_sizes(&set[0]), vec![1, 1]);
}

#[test]
fn radical_site_initiation_cleaves_beta_bond() {
    let set = run(RuleId::RadicalSiteInitiation, carbon_chain(3, Some(0)));
    assert_eq!(set.len(), 1);
    assert_eq!(product_sizes(&set[0]), vec![2, 1]);
    let alkene = &set[0].products()[0];
    assert_eq!(alkene.bond(EdgeIndex::new(0)).order, Double);
    assert_eq!(set[0].products()[1].atom(n(0)).single_electrons, 1);
}

#[test]
fn radical_site_initiation_expels_hydrogen_atom() {
    let mol = make_hydrogens_explicit(&carbon_chain(2, Some(0)));
    let set = run(RuleId::RadicalSiteInitiationH, mol);
    assert_eq!(set.len(), 3);
    for record in &set {
        assert_eq!(product_sizes(record), vec![6, 1]);
        let h = &record.products()[1];
        assert_eq!(h.atom(n(0)).single_electrons, 1);
    }
}

#[test]
fn radical_cation_initiation_keeps_charge() {
    // CH3-CH2-[OH+*]
    let mol = build(
        &[("C", 3, 0, 0), ("C", 2, 0, 0), ("O", 1, 1, 1)],
        &[(0, 1, Single), (1, 2, Single)],
    );
    let set = run(RuleId::RadicalChargeSiteInitiation, mol);
    assert_eq!(set.len(), 1);
    assert_eq!(product_sizes(&set[0]), vec![1, 2]);
    let oxonium = &set[0].products()[1];
    assert_eq!(oxonium.atom(n(1)).formal_charge, 1);
    assert_eq!(oxonium.bond(EdgeIndex::new(0)).order, Double);
}

#[test]
fn radical_cation_initiation_expels_hydrogen_atom() {
    let mol = make_hydrogens_explicit(&build(
        &[("C", 3, 0, 0), ("O", 1, 1, 1)],
        &[(0, 1, Single)],
    ));
    let set = run(RuleId::RadicalChargeSiteInitiationH, mol);
    assert_eq!(set.len(), 3);
    assert_eq!(product_sizes(&set[0]), vec![5, 1]);
}

#[test]
fn allyl_rearrangements() {
    let allyl = |charge: i8, se: u8| {
        build(
            &[("C", 2, charge, se), ("C", 1, 0, 0), ("C", 2, 0, 0)],
            &[(0, 1, Single), (1, 2, Double)],
        )
    };
    for (rule, charge, se) in [
        (RuleId::RearrangementAnion, -1, 0),
        (RuleId::RearrangementCation, 1, 0),
        (RuleId::RearrangementRadical, 0, 1),
    ] {
        let set = run(rule, allyl(charge, se));
        assert_eq!(set.len(), 1, "{rule}");
        let p = &set[0].products()[0];
        assert_eq!(p.atom(n(0)).formal_charge, 0, "{rule}");
        assert_eq!(p.atom(n(2)).formal_charge, charge, "{rule}");
        assert_eq!(p.atom(n(2)).single_electrons, se, "{rule}");
        assert_eq!(p.bond(EdgeIndex::new(0)).order, Double, "{rule}");
        assert_eq!(p.bond(EdgeIndex::new(1)).order, Single, "{rule}");
    }
}

#[test]
fn lone_pair_rearrangement_of_enol() {
    let mol = build(
        &[("O", 1, 0, 0), ("C", 1, 0, 0), ("C", 2, 0, 0)],
        &[(0, 1, Single), (1, 2, Double)],
    );
    let set = run(RuleId::RearrangementLonePair, mol);
    assert_eq!(set.len(), 1);
    let p = &set[0].products()[0];
    assert_eq!(p.atom(n(0)).formal_charge, 1);
    assert_eq!(p.atom(n(2)).formal_charge, -1);
    assert_eq!(p.atom(n(2)).lone_pairs, 1);
}

#[test]
fn lone_pair_shared_with_cation() {
    let mol = build(&[("N", 2, 0, 0), ("C", 2, 1, 0)], &[(0, 1, Single)]);
    let set = run(RuleId::SharingLonePair, mol);
    assert_eq!(set.len(), 1);
    let p = &set[0].products()[0];
    assert_eq!(p.atom(n(0)).formal_charge, 1);
    assert_eq!(p.atom(n(1)).formal_charge, 0);
    assert_eq!(p.bond(EdgeIndex::new(0)).order, Double);
}

#[test]
fn zwitterion_collapses_to_double_bond() {
    let mol = build(&[("C", 2, 1, 0), ("C", 2, -1, 0)], &[(0, 1, Single)]);
    let set = run(RuleId::SharingAnion, mol);
    assert_eq!(set.len(), 1);
    let p = &set[0].products()[0];
    assert_eq!(total_charge(p), 0);
    assert_eq!(p.atom(n(1)).lone_pairs, 0);
    assert_eq!(p.bond(EdgeIndex::new(0)).order, Double);
}

#[test]
fn hyperconjugation_expels_proton() {
    let mol = make_hydrogens_explicit(&build(
        &[("C", 2, 1, 0), ("C", 3, 0, 0)],
        &[(0, 1, Single)],
    ));
    let set = run(RuleId::Hyperconjugation, mol);
    assert_eq!(set.len(), 3);
    let proton = &set[0].products()[1];
    assert_eq!(proton.atom_count(), 1);
    assert_eq!(proton.atom(n(0)).formal_charge, 1);
}

#[test]
fn protonation_of_double_bond() {
    let mol = build(&[("C", 2, 0, 0), ("C", 2, 0, 0)], &[(0, 1, Double)]);
    let set = run(RuleId::AdductionProtonPb, mol);
    assert_eq!(set.len(), 2);
    let p = &set[0].products()[0];
    assert_eq!(p.atom_count(), 3);
    assert_eq!(p.atom(n(0)).formal_charge, 1);
    assert!(p.bond_between(n(1), n(2)).is_some());
}

#[test]
fn sodium_adduct_on_oxygen() {
    let set = run(RuleId::AdductionSodiumLp, build(&[("O", 2, 0, 0)], &[]));
    assert_eq!(set.len(), 1);
    let p = &set[0].products()[0];
    assert_eq!(p.atom(n(1)).element(), Some(Element::Na));
    assert_eq!(p.atom(n(1)).formal_charge, 0);
    assert_eq!(p.atom(n(0)).formal_charge, 1);
}

#[test]
fn pi_bonds_shift_around_benzene() {
    let mol = build(
        &[("C", 1, 0, 0); 6],
        &[
            (0, 1, Double),
            (1, 2, Single),
            (2, 3, Double),
            (3, 4, Single),
            (4, 5, Double),
            (5, 0, Single),
        ],
    );
    let set = run(RuleId::PiBondingMovement, mol.clone());
    assert_eq!(set.len(), 1);
    let p = &set[0].products()[0];
    for e in mol.bonds() {
        assert_ne!(p.bond(e).order, mol.bond(e).order);
    }
}

#[test]
fn ring_bonds_never_homolyze() {
    let ring = build(
        &[("C", 2, 0, 0); 6],
        &[(0, 1, Single), (1, 2, Single), (2, 3, Single), (3, 4, Single), (4, 5, Single), (5, 0, Single)],
    );
    assert!(run(RuleId::HomolyticCleavage, ring).is_empty());
}

#[test]
fn hydrogen_transfer_at_each_distance() {
    let mol = make_hydrogens_explicit(&carbon_chain(6, Some(0)));
    for (rule, terminal) in [
        (RuleId::RadicalSiteHrAlpha, 1),
        (RuleId::RadicalSiteHrBeta, 2),
        (RuleId::RadicalSiteHrGamma, 3),
        (RuleId::RadicalSiteHrDelta, 4),
    ] {
        let set = run(rule, mol.clone());
        assert_eq!(set.len(), 1, "{rule}");
        let record = &set[0];
        assert_eq!(record.center().atoms[1], n(terminal), "{rule}");
        let p = &record.products()[0];
        assert_eq!(p.atom_count(), mol.atom_count(), "{rule}");
        assert_eq!(p.atom(n(0)).single_electrons, 0, "{rule}");
        assert_eq!(p.atom(n(terminal)).single_electrons, 1, "{rule}");
    }
}

#[test]
fn every_record_conserves_electrons() {
    let explicit = make_hydrogens_explicit(&carbon_chain(5, Some(0)));
    let molecules = [
        carbon_chain(4, None),
        carbon_chain(4, Some(1)),
        explicit,
        build(&[("C", 2, 0, 0), ("O", 0, 0, 0)], &[(0, 1, Double)]),
        build(&[("O", 1, 0, 0), ("C", 1, 0, 0), ("C", 2, 0, 0)], &[(0, 1, Single), (1, 2, Double)]),
    ];
    for rule in RuleId::ALL {
        for mol in &molecules {
            for record in &run(rule, mol.clone()) {
                let before: i32 = record.reactants().iter().map(|m| electron_balance(&**m)).sum();
                let after: i32 = record.products().iter().map(electron_balance).sum();
                assert_eq!(before, after, "{rule}");
                let consumed: usize = record.reactants().iter().map(|m| m.atom_count()).sum();
                assert_eq!(consumed, record.total_product_atoms(), "{rule}");
            }
        }
    }
}
