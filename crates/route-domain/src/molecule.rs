use route_canon::canonical_smiles;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::policy::MoleculeIdentityPolicy;
use crate::DomainError;

/// Hash estable de una clave de identidad: SHA-256 en hex truncado a
/// 128 bits, con un prefijo que indica el tipo de nodo.
pub(crate) fn identity_hash(prefix: &str, identity_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(identity_key.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    format!("{}{}", prefix, &digest[..32])
}

pub(crate) fn check_format(inp_fmt: &str) -> Result<(), DomainError> {
    if inp_fmt == "smiles" {
        Ok(())
    } else {
        Err(DomainError::UnknownFormat(inp_fmt.to_string()))
    }
}

/// Representa una especie química única. Dos instancias comparan iguales
/// si y solo si su clave de identidad coincide, sin importar la variante
/// de la cadena de entrada.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Molecule {
    uid: String,
    identity_key: String,
    smiles: String,
}

impl Molecule {
    pub(crate) fn new(identity_key: String, smiles: String) -> Self {
        let uid = identity_hash("M", &identity_key);
        Molecule { uid, identity_key, smiles }
    }

    /// Hash corto de la clave de identidad, usable como llave de mapa.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn identity_key(&self) -> &str {
        &self.identity_key
    }

    /// Forma canónica legible de la molécula.
    pub fn smiles(&self) -> &str {
        &self.smiles
    }
}

impl PartialEq for Molecule {
    fn eq(&self, other: &Self) -> bool {
        self.identity_key == other.identity_key
    }
}

impl Eq for Molecule {}

impl Hash for Molecule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity_key.hash(state);
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<molecule: {}, {}>", self.smiles, self.uid)
    }
}

/// Constructor de moléculas con la política de identidad fijada al
/// crearlo, no por llamada.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoleculeConstructor {
    policy: MoleculeIdentityPolicy,
}

impl MoleculeConstructor {
    pub fn new(policy: MoleculeIdentityPolicy) -> Self {
        MoleculeConstructor { policy }
    }

    pub fn from_policy_name(name: &str) -> Result<Self, DomainError> {
        Ok(Self::new(MoleculeIdentityPolicy::from_name(name)?))
    }

    pub fn policy(&self) -> MoleculeIdentityPolicy {
        self.policy
    }

    /// Construye una molécula a partir de su cadena molecular.
    ///
    /// # Errores
    /// `DomainError::Parsing` si la cadena no es válida;
    /// `DomainError::UnknownFormat` si el formato no es reconocido.
    pub fn build_from_molecule_string(
        &self,
        molecule_string: &str,
        inp_fmt: &str,
    ) -> Result<Molecule, DomainError> {
        check_format(inp_fmt)?;
        let canonical = canonical_smiles(molecule_string)?;
        let identity_key = match self.policy {
            MoleculeIdentityPolicy::CanonicalSmiles => canonical.clone(),
        };
        Ok(Molecule::new(identity_key, canonical))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_species_compare_equal() {
        let constructor = MoleculeConstructor::default();
        let m1 = constructor.build_from_molecule_string("CCO.CCN", "smiles").unwrap();
        let m2 = constructor.build_from_molecule_string("CCN.CCO", "smiles").unwrap();
        assert_eq!(m1, m2);
        assert_eq!(m1.uid(), m2.uid());
    }

    #[test]
    fn different_species_compare_unequal() {
        let constructor = MoleculeConstructor::default();
        let m1 = constructor.build_from_molecule_string("CCO", "smiles").unwrap();
        let m2 = constructor.build_from_molecule_string("CCN", "smiles").unwrap();
        assert_ne!(m1, m2);
        assert_ne!(m1.uid(), m2.uid());
    }

    #[test]
    fn uid_is_prefixed_and_fixed_length() {
        let constructor = MoleculeConstructor::default();
        let mol = constructor.build_from_molecule_string("CCN", "smiles").unwrap();
        assert!(mol.uid().starts_with('M'));
        assert_eq!(mol.uid().len(), 33);
    }

    #[test]
    fn malformed_string_fails() {
        let constructor = MoleculeConstructor::default();
        assert!(matches!(
            constructor.build_from_molecule_string("CC(?O", "smiles"),
            Err(DomainError::Parsing(_))
        ));
    }

    #[test]
    fn unknown_format_fails() {
        let constructor = MoleculeConstructor::default();
        assert!(matches!(
            constructor.build_from_molecule_string("CCN", "inchi"),
            Err(DomainError::UnknownFormat(_))
        ));
    }
}
