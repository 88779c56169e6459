//! Well-known property names.
//!
//! Every [`TagRegistry`](crate::TagRegistry) built with `new()` interns
//! [`NAMES`] first and in order, so the constant for a name is also its tag
//! in every process. Code that keys properties by these constants skips the
//! registry entirely.
//!
//! ```ignore
//! use molprop_tags::common_properties;
//! dict.set_val(common_properties::NAME, "benzene");
//! ```
//!
//! Append new names at the end only: inserting in the middle renumbers every
//! later constant.

use crate::PropTag;

/// Defines one `PropTag` constant per name plus the ordered [`NAMES`] table.
///
/// Constants are numbered by position, starting at 0.
macro_rules! define_common_properties {
    ($($konst:ident => $name:literal),* $(,)?) => {
        /// Well-known names in tag order.
        pub const NAMES: &[&str] = &[$($name),*];

        define_common_properties!(@consts 0u32; $($konst => $name),*);
    };
    (@consts $n:expr; $konst:ident => $name:literal $(, $rest:ident => $rest_name:literal)*) => {
        #[doc = concat!("Tag for `", $name, "`.")]
        pub const $konst: PropTag = PropTag::from_raw($n);

        define_common_properties!(@consts $n + 1; $($rest => $rest_name),*);
    };
    (@consts $n:expr;) => {};
}

define_common_properties! {
    // Entity identity and provenance
    NAME => "_Name",
    MOL_FILE_INFO => "MolFileInfo",
    MOL_FILE_COMMENTS => "MolFileComments",
    TWO_D_CONF => "_2DConf",
    THREE_D_CONF => "_3DConf",
    DO_ISO_SMILES => "_doIsoSmiles",
    EXTRA_RINGS => "extraRings",
    SMILES_ATOM_OUTPUT_ORDER => "_smilesAtomOutputOrder",
    STEREOCHEM_DONE => "_StereochemDone",
    NEEDS_QUERY_SCAN => "_NeedsQueryScan",
    FRAG_SMARTS => "_fragSMARTS",
    MAX_ATTACH_IDX => "maxAttachIdx",
    ORIG_NO_IMPLICIT => "origNoImplicit",
    RING_MEMBERSHIP => "ringMembership",
    // Descriptor caches
    CONNECTIVITY_HK_DELTAS => "_connectivityHKDeltas",
    CONNECTIVITY_N_VALS => "_connectivityNVals",
    CRIPPEN_LOG_P => "_crippenLogP",
    CRIPPEN_LOG_P_CONTRIBS => "_crippenLogPContribs",
    CRIPPEN_MR => "_crippenMR",
    CRIPPEN_MR_CONTRIBS => "_crippenMRContribs",
    LABUTE_ASA => "_labuteASA",
    LABUTE_ATOM_CONTRIBS => "_labuteAtomContribs",
    LABUTE_ATOM_H_CONTRIB => "_labuteAtomHContrib",
    TPSA => "_tpsa",
    TPSA_ATOM_CONTRIBS => "_tpsaAtomContribs",
    NUM_AROM => "numArom",
    MMFF_SANITIZED => "_MMFFSanitized",
    // Per-atom charges and labels
    ATOM_CRIPPEN_LOG_P => "_CrippenLogP",
    ATOM_CRIPPEN_MR => "_CrippenMR",
    GASTEIGER_CHARGE => "_GasteigerCharge",
    GASTEIGER_H_CHARGE => "_GasteigerHCharge",
    ATOM_LABEL => "_AtomLabel",
    QUERY_FORMAL_CHARGE => "_QueryFormalCharge",
    QUERY_H_COUNT => "_QueryHCount",
    QUERY_ISOTOPE => "_QueryIsotope",
    QUERY_MASS => "_QueryMass",
    REACTION_DEGREE_CHANGED => "_ReactionDegreeChanged",
    NULL_BOND => "NullBond",
    RGROUP_ATOM_MAPS => "_rgroupAtomMaps",
    RGROUP_BONDS => "_rgroupBonds",
    ATOM_ID => "_AtomID",
    // Stereochemistry
    BONDS_POTENTIAL_STEREO => "_BondsPotentialStereo",
    CIP_CODE => "_CIPCode",
    CIP_RANK => "_CIPRank",
    CHIRALITY_POSSIBLE => "_ChiralityPossible",
    UNKNOWN_STEREO => "_UnknownStereo",
    RING_STEREO_ATOMS => "_ringStereoAtoms",
    RING_STEREOCHEM_CAUSES => "_ringStereochemCauses",
    RING_STEREO_WARNING => "_ringStereoWarning",
    // SMILES/SMARTS traversal
    SMILES_START => "_SmilesStart",
    TRAVERSAL_BOND_INDEX_ORDER => "_TraversalBondIndexOrder",
    TRAVERSAL_RING_CLOSURE_BOND => "_TraversalRingClosureBond",
    TRAVERSAL_START_POINT => "_TraversalStartPoint",
    QUERY_ROOT_ATOM => "_queryRootAtom",
    HAS_MASS_QUERY => "_hasMassQuery",
    PROTECTED => "_protected",
    SUPPLEMENTAL_SMILES_LABEL => "_supplementalSmilesLabel",
    UNSPECIFIED_ORDER => "_unspecifiedOrder",
    RING_CLOSURES => "_RingClosures",
    // Mol file fields
    MOL_ATOM_MAP_NUMBER => "molAtomMapNumber",
    MOL_FILE_ALIAS => "molFileAlias",
    MOL_FILE_VALUE => "molFileValue",
    MOL_INVERSION_FLAG => "molInversionFlag",
    MOL_PARITY => "molParity",
    MOL_RXN_COMPONENT => "molRxnComponent",
    MOL_RXN_ROLE => "molRxnRole",
    MOL_TOT_VALENCE => "molTotValence",
    MOL_FILE_R_LABEL => "_MolFileRLabel",
    MOL_FILE_CHIRAL_FLAG => "_MolFileChiralFlag",
    DUMMY_LABEL => "dummyLabel",
    // Bookkeeping
    COMPUTED_PROPS => "__computedProps",
}

/// Highest well-known tag.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the well-known table is a few dozen entries"
)]
pub const MAX: PropTag = PropTag::from_raw(NAMES.len() as u32 - 1);

/// Name of a well-known tag, without consulting a registry.
///
/// Returns `None` for tags above [`MAX`]; those are only meaningful to the
/// registry that allocated them.
pub fn name_of(tag: PropTag) -> Option<&'static str> {
    NAMES.get(tag.index()).copied()
}
