//! Shared domain vocabularies
//!
//! The string codes are part of the wire and storage contract inherited from
//! the previous system, so variants keep their Spanish serialized forms.

use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, Postgres};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// MaterialKind
// ---------------------------------------------------------------------------

/// Kind of bibliographic material an item can reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MaterialKind {
    #[serde(rename = "libro")]
    Book,
    #[serde(rename = "revista")]
    Magazine,
    #[serde(rename = "periodico")]
    Newspaper,
}

impl MaterialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialKind::Book => "libro",
            MaterialKind::Magazine => "revista",
            MaterialKind::Newspaper => "periodico",
        }
    }
}

impl std::fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MaterialKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "libro" => Ok(MaterialKind::Book),
            "revista" => Ok(MaterialKind::Magazine),
            "periodico" => Ok(MaterialKind::Newspaper),
            _ => Err(format!("Invalid material kind: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// LoanState
// ---------------------------------------------------------------------------

/// Loan lifecycle states
///
/// `Overdue` exists in the stored vocabulary but no operation currently
/// produces it; operators can set it through the update endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LoanState {
    #[serde(rename = "activo")]
    Active,
    #[serde(rename = "devuelto")]
    Returned,
    #[serde(rename = "vencido")]
    Overdue,
}

impl LoanState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanState::Active => "activo",
            LoanState::Returned => "devuelto",
            LoanState::Overdue => "vencido",
        }
    }
}

impl std::fmt::Display for LoanState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LoanState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "activo" => Ok(LoanState::Active),
            "devuelto" => Ok(LoanState::Returned),
            "vencido" => Ok(LoanState::Overdue),
            _ => Err(format!("Invalid loan state: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for LoanState {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for LoanState {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for LoanState {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

// ---------------------------------------------------------------------------
// FineState
// ---------------------------------------------------------------------------

/// Fine lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FineState {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "pagada")]
    Paid,
    #[serde(rename = "cancelada")]
    Cancelled,
}

impl FineState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FineState::Pending => "pendiente",
            FineState::Paid => "pagada",
            FineState::Cancelled => "cancelada",
        }
    }
}

impl std::fmt::Display for FineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FineState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pendiente" => Ok(FineState::Pending),
            "pagada" => Ok(FineState::Paid),
            "cancelada" => Ok(FineState::Cancelled),
            _ => Err(format!("Invalid fine state: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for FineState {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for FineState {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for FineState {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

// ---------------------------------------------------------------------------
// ItemCondition
// ---------------------------------------------------------------------------

/// Physical condition of an item copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ItemCondition {
    #[serde(rename = "bueno")]
    Good,
    #[serde(rename = "regular")]
    Fair,
    #[serde(rename = "malo")]
    Poor,
    #[serde(rename = "reparacion")]
    UnderRepair,
}

impl ItemCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCondition::Good => "bueno",
            ItemCondition::Fair => "regular",
            ItemCondition::Poor => "malo",
            ItemCondition::UnderRepair => "reparacion",
        }
    }
}

impl std::fmt::Display for ItemCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ItemCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bueno" => Ok(ItemCondition::Good),
            "regular" => Ok(ItemCondition::Fair),
            "malo" => Ok(ItemCondition::Poor),
            "reparacion" => Ok(ItemCondition::UnderRepair),
            _ => Err(format!("Invalid item condition: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for ItemCondition {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for ItemCondition {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for ItemCondition {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_kind_codes() {
        assert_eq!(MaterialKind::Book.as_str(), "libro");
        assert_eq!("revista".parse::<MaterialKind>(), Ok(MaterialKind::Magazine));
        assert_eq!("PERIODICO".parse::<MaterialKind>(), Ok(MaterialKind::Newspaper));
        assert!("cassette".parse::<MaterialKind>().is_err());
    }

    #[test]
    fn test_loan_state_codes() {
        assert_eq!(LoanState::Active.as_str(), "activo");
        assert_eq!("devuelto".parse::<LoanState>(), Ok(LoanState::Returned));
        assert_eq!("vencido".parse::<LoanState>(), Ok(LoanState::Overdue));
        assert!("prestado".parse::<LoanState>().is_err());
    }

    #[test]
    fn test_fine_state_codes() {
        assert_eq!("pagada".parse::<FineState>(), Ok(FineState::Paid));
        assert_eq!("cancelada".parse::<FineState>(), Ok(FineState::Cancelled));
        assert!("anulada".parse::<FineState>().is_err());
    }

    #[test]
    fn test_item_condition_codes() {
        assert_eq!("reparacion".parse::<ItemCondition>(), Ok(ItemCondition::UnderRepair));
        assert_eq!(ItemCondition::Fair.as_str(), "regular");
        assert!("nuevo".parse::<ItemCondition>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        let json = serde_json::to_string(&LoanState::Returned).unwrap();
        assert_eq!(json, "\"devuelto\"");
        let back: LoanState = serde_json::from_str("\"activo\"").unwrap();
        assert_eq!(back, LoanState::Active);
    }
}
