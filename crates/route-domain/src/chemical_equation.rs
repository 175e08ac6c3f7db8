use route_canon::ReactionParts;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::molecule::{check_format, identity_hash, Molecule, MoleculeConstructor};
use crate::policy::{EquationIdentityPolicy, MoleculeIdentityPolicy};
use crate::DomainError;

/// Rol de una molécula dentro de una ecuación química.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Reactant,
    Reagent,
    Product,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Reactant => "reactant",
            Role::Reagent => "reagent",
            Role::Product => "product",
        }
    }
}

/// Mapa rol -> moléculas participantes, en orden canónico por clave de
/// identidad y sin duplicados (las repeticiones estequiométricas colapsan).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMap {
    reactants: Vec<Molecule>,
    reagents: Vec<Molecule>,
    products: Vec<Molecule>,
}

impl RoleMap {
    fn new(reactants: Vec<Molecule>, reagents: Vec<Molecule>, products: Vec<Molecule>) -> Self {
        RoleMap {
            reactants: normalize(reactants),
            reagents: normalize(reagents),
            products: normalize(products),
        }
    }

    pub fn reactants(&self) -> &[Molecule] {
        &self.reactants
    }

    pub fn reagents(&self) -> &[Molecule] {
        &self.reagents
    }

    pub fn products(&self) -> &[Molecule] {
        &self.products
    }

    pub fn molecules_with_role(&self, role: Role) -> &[Molecule] {
        match role {
            Role::Reactant => &self.reactants,
            Role::Reagent => &self.reagents,
            Role::Product => &self.products,
        }
    }

    fn joined_keys(molecules: &[Molecule]) -> String {
        molecules.iter().map(Molecule::identity_key).collect::<Vec<_>>().join(".")
    }

    fn joined_smiles(molecules: &[Molecule]) -> String {
        molecules.iter().map(Molecule::smiles).collect::<Vec<_>>().join(".")
    }
}

/// Ordena por clave de identidad y elimina duplicados por identidad.
fn normalize(mut molecules: Vec<Molecule>) -> Vec<Molecule> {
    molecules.sort_by(|a, b| a.identity_key().cmp(b.identity_key()));
    molecules.dedup_by(|a, b| a.identity_key() == b.identity_key());
    molecules
}

/// Representa una reacción química única. La igualdad se decide solo por
/// la clave de identidad bajo la política activa: dos ecuaciones con los
/// mismos reactivos/productos pero distintos agentes pueden ser iguales o
/// distintas según la política.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChemicalEquation {
    uid: String,
    identity_key: String,
    smiles: String,
    role_map: RoleMap,
}

impl ChemicalEquation {
    fn new(identity_key: String, smiles: String, role_map: RoleMap) -> Self {
        let uid = identity_hash("CE", &identity_key);
        ChemicalEquation { uid, identity_key, smiles, role_map }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn identity_key(&self) -> &str {
        &self.identity_key
    }

    /// SMILES canónico de la reacción, con todos los roles presentes.
    pub fn smiles(&self) -> &str {
        &self.smiles
    }

    pub fn role_map(&self) -> &RoleMap {
        &self.role_map
    }

    pub fn reactants(&self) -> &[Molecule] {
        self.role_map.reactants()
    }

    pub fn reagents(&self) -> &[Molecule] {
        self.role_map.reagents()
    }

    pub fn products(&self) -> &[Molecule] {
        self.role_map.products()
    }

    /// Moléculas que la ecuación consume: reactivos y agentes, en ese orden.
    pub fn consumed(&self) -> impl Iterator<Item = &Molecule> {
        self.role_map.reactants().iter().chain(self.role_map.reagents())
    }
}

impl PartialEq for ChemicalEquation {
    fn eq(&self, other: &Self) -> bool {
        self.identity_key == other.identity_key
    }
}

impl Eq for ChemicalEquation {}

impl Hash for ChemicalEquation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity_key.hash(state);
    }
}

impl fmt::Display for ChemicalEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<reaction: {}, {}>", self.smiles, self.uid)
    }
}

/// Constructor de ecuaciones químicas. Las políticas de identidad (para
/// moléculas y para la ecuación) se fijan al crearlo.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChemicalEquationConstructor {
    molecule_constructor: MoleculeConstructor,
    equation_policy: EquationIdentityPolicy,
}

impl ChemicalEquationConstructor {
    pub fn new(
        molecule_policy: MoleculeIdentityPolicy,
        equation_policy: EquationIdentityPolicy,
    ) -> Self {
        ChemicalEquationConstructor {
            molecule_constructor: MoleculeConstructor::new(molecule_policy),
            equation_policy,
        }
    }

    pub fn from_policy_names(
        molecule_policy: &str,
        equation_policy: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self::new(
            MoleculeIdentityPolicy::from_name(molecule_policy)?,
            EquationIdentityPolicy::from_name(equation_policy)?,
        ))
    }

    pub fn equation_policy(&self) -> EquationIdentityPolicy {
        self.equation_policy
    }

    /// Construye una ecuación química a partir de su cadena de reacción.
    ///
    /// # Errores
    /// `DomainError::Parsing` si la cadena no es una reacción válida;
    /// `DomainError::UnknownFormat` si el formato no es reconocido.
    pub fn build_from_reaction_string(
        &self,
        reaction_string: &str,
        inp_fmt: &str,
    ) -> Result<ChemicalEquation, DomainError> {
        check_format(inp_fmt)?;
        let parts = ReactionParts::parse(reaction_string)?;
        let role_map = RoleMap::new(
            self.build_role(&parts.reactants, inp_fmt)?,
            self.build_role(&parts.reagents, inp_fmt)?,
            self.build_role(&parts.products, inp_fmt)?,
        );
        let smiles = format!(
            "{}>{}>{}",
            RoleMap::joined_smiles(role_map.reactants()),
            RoleMap::joined_smiles(role_map.reagents()),
            RoleMap::joined_smiles(role_map.products())
        );
        let identity_key = match self.equation_policy {
            EquationIdentityPolicy::ReactantsProducts => format!(
                "{}>>{}",
                RoleMap::joined_keys(role_map.reactants()),
                RoleMap::joined_keys(role_map.products())
            ),
            EquationIdentityPolicy::ReactantsReagentsProducts => format!(
                "{}>{}>{}",
                RoleMap::joined_keys(role_map.reactants()),
                RoleMap::joined_keys(role_map.reagents()),
                RoleMap::joined_keys(role_map.products())
            ),
        };
        Ok(ChemicalEquation::new(identity_key, smiles, role_map))
    }

    fn build_role(&self, fragments: &[String], inp_fmt: &str) -> Result<Vec<Molecule>, DomainError> {
        fragments
            .iter()
            .map(|s| self.molecule_constructor.build_from_molecule_string(s, inp_fmt))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reactant_order_does_not_change_identity() {
        let constructor = ChemicalEquationConstructor::default();
        let ce1 = constructor
            .build_from_reaction_string("CCC(=O)O.CCN>>CCC(=O)NCC", "smiles")
            .unwrap();
        let ce2 = constructor
            .build_from_reaction_string("CCN.CCC(=O)O>>CCC(=O)NCC", "smiles")
            .unwrap();
        assert_eq!(ce1, ce2);
        assert_eq!(ce1.uid(), ce2.uid());
        assert_eq!(ce1.smiles(), ce2.smiles());
    }

    #[test]
    fn reagents_are_ignored_under_default_policy() {
        let constructor = ChemicalEquationConstructor::default();
        let bare = constructor
            .build_from_reaction_string("CCC(=O)O.CCN>>CCC(=O)NCC", "smiles")
            .unwrap();
        let with_reagent = constructor
            .build_from_reaction_string("CCC(=O)O.CCN>C1CCOC1>CCC(=O)NCC", "smiles")
            .unwrap();
        assert_eq!(bare, with_reagent);
        // La forma canónica sí conserva el agente
        assert_eq!(with_reagent.smiles(), "CCC(=O)O.CCN>C1CCOC1>CCC(=O)NCC");
    }

    #[test]
    fn reagents_distinguish_under_inclusive_policy() {
        let constructor = ChemicalEquationConstructor::new(
            MoleculeIdentityPolicy::CanonicalSmiles,
            EquationIdentityPolicy::ReactantsReagentsProducts,
        );
        let bare = constructor
            .build_from_reaction_string("CCC(=O)O.CCN>>CCC(=O)NCC", "smiles")
            .unwrap();
        let with_reagent = constructor
            .build_from_reaction_string("CCC(=O)O.CCN>C1CCOC1>CCC(=O)NCC", "smiles")
            .unwrap();
        assert_ne!(bare, with_reagent);
    }

    #[test]
    fn single_step_smiles_roundtrips() {
        let constructor = ChemicalEquationConstructor::default();
        let ce = constructor.build_from_reaction_string("CCN>>CCC(=O)NCC", "smiles").unwrap();
        assert_eq!(ce.smiles(), "CCN>>CCC(=O)NCC");
        assert!(ce.uid().starts_with("CE"));
    }

    #[test]
    fn stoichiometric_repeats_collapse() {
        let constructor = ChemicalEquationConstructor::default();
        let ce = constructor.build_from_reaction_string("CCN.CCN>>CCC(=O)NCC", "smiles").unwrap();
        assert_eq!(ce.reactants().len(), 1);
    }

    #[test]
    fn roles_are_queryable() {
        let constructor = ChemicalEquationConstructor::default();
        let ce = constructor
            .build_from_reaction_string("CCC(=O)O.CCN>C1CCOC1>CCC(=O)NCC", "smiles")
            .unwrap();
        assert_eq!(ce.role_map().molecules_with_role(Role::Reagent).len(), 1);
        assert_eq!(ce.consumed().count(), 3);
        assert_eq!(ce.products().len(), 1);
    }

    #[test]
    fn malformed_reaction_fails() {
        let constructor = ChemicalEquationConstructor::default();
        assert!(matches!(
            constructor.build_from_reaction_string("CCN>CCO", "smiles"),
            Err(DomainError::Parsing(_))
        ));
    }
}
