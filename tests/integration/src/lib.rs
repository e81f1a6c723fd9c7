//! Userinfo payloads for the mapping scenarios.
//!
//! Shapes follow what ProSanté Connect returns from its userinfo endpoint
//! for the test practitioner of the integration environment.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use psc_spi::UserInfo;
use serde_json::{json, Value};

/// Subject of the test practitioner.
pub const PRACTITIONER_SUB: &str = "f:550dc1c8-d97b-4b1e-ac8c-8eb4471cf9dd:ANS20231122132732";

/// Userinfo of a registered pedicurist-podiatrist (profession code `80`).
#[must_use]
pub fn practitioner_userinfo() -> UserInfo {
    into_userinfo(practitioner_claims())
}

/// Userinfo of the same person without any professional directory entry.
#[must_use]
pub fn regular_userinfo() -> UserInfo {
    into_userinfo(json!({
        "sub": PRACTITIONER_SUB,
        "preferred_username": "ANS20231122132732",
        "codeCivilite": "M",
        "given_name": "Fistinien",
        "SubjectNameID": "ANS20231122132732",
        "family_name": "Grominoch",
    }))
}

/// Raw claims of [`practitioner_userinfo`], for tests that tweak them.
#[must_use]
pub fn practitioner_claims() -> Value {
    json!({
        "Secteur_Activite": "SA07^1.2.250.1.71.4.2.4",
        "sub": PRACTITIONER_SUB,
        "codeGenreActivite": "GENR01",
        "SubjectOrganization": "CABINET INDIVIDUEL PEDI PODO0023704",
        "Mode_Acces_Raison": "",
        "preferred_username": "ANS20231122132732",
        "codeCivilite": "M",
        "given_name": "Fistinien",
        "Acces_Regulation_Medicale": "FAUX",
        "UITVersion": "1.0",
        "Palier_Authentification": "APPPRIP3^1.2.250.1.213.1.5.1.1.1",
        "SubjectRefPro": {
            "exercices": [
                {
                    "codeProfession": "80",
                    "codeCategorieProfessionnelle": "C",
                    "codeCiviliteDexercice": "",
                    "nomDexercice": "Grominoch",
                    "prenomDexercice": "Fistinien",
                    "codeTypeSavoirFaire": "",
                    "codeSavoirFaire": "",
                    "activities": [
                        {
                            "codeModeExercice": "L",
                            "codeSecteurDactivite": "SA07",
                            "codeGenreActivite": "GENR01",
                            "identifiantTechniqueDeLaStructure": "R81311",
                            "raisonSocialeSite": "CABINET INDIVIDUEL PEDI PODO0023704",
                            "complementDestinataire": "CABINET INDIVIDUEL PEDI PODO",
                            "numeroVoie": "2",
                            "codeTypeDeVoie": "R",
                            "libelleVoie": "DE LA CHAUSSURE",
                            "bureauCedex": "75015 PARIS",
                            "codePostal": "75015",
                            "codePays": "99000",
                            "adresseEMail": "",
                            "ancienIdentifiantDeLaStructure": "499700237045007",
                            "autoriteDenregistrement": "CNOPP/CNOPP/CNOPP",
                        }
                    ],
                }
            ]
        },
        "SubjectOrganizationID": "R81311",
        "SubjectRole": ["80^1.2.250.1.213.1.1.5.5"],
        "PSI_Locale": "1.2.250.1.213.1.3.1.1",
        "otherIds": [
            {"identifiant": "ANS20231122132732", "origine": "EDIT", "qualite": 1}
        ],
        "SubjectNameID": "ANS20231122132732",
        "family_name": "Grominoch",
    })
}

/// Converts a JSON object into [`UserInfo`].
///
/// # Panics
///
/// Panics if `claims` is not an object.
#[must_use]
pub fn into_userinfo(claims: Value) -> UserInfo {
    UserInfo::from_value(claims).expect("userinfo fixtures are JSON objects")
}
