//! Lifecycle transaction translators.
//!
//! Acceptances, cancellations and transfers share one record shape across
//! security kinds; the object type passed to `from_ledger` selects the
//! discriminator stamped on the result.

use super::{ensure_object_type, ledger_time, LedgerTranslator, TranslationContext};
use crate::application::canonical::{optional_text, require_non_empty, require_text};
use crate::domain::errors::TranslationResult;
use crate::domain::interchange::{
    Acceptance, ConvertibleCancellation, ConvertibleTransfer, EquityCompensationExercise,
    QuantityCancellation, QuantityTransfer, StockRepurchase, WarrantExercise, WarrantRetraction,
};
use crate::domain::ledger::{
    LedgerAcceptance, LedgerConvertibleCancellation, LedgerConvertibleTransfer,
    LedgerEquityCompensationExercise, LedgerQuantityCancellation, LedgerQuantityTransfer,
    LedgerStockRepurchase, LedgerWarrantExercise, LedgerWarrantRetraction,
};
use crate::domain::value_objects::{ObjectType, OcfDate};

impl LedgerTranslator for Acceptance {
    type Ledger = LedgerAcceptance;

    const OBJECT_TYPES: &'static [ObjectType] = &[
        ObjectType::TxStockAcceptance,
        ObjectType::TxConvertibleAcceptance,
        ObjectType::TxWarrantAcceptance,
    ];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(&self, _ctx: &TranslationContext) -> TranslationResult<LedgerAcceptance> {
        ensure_object_type::<Self>(self.object_type)?;
        Ok(LedgerAcceptance {
            id: require_text(&self.id, "id")?,
            date: ledger_time(self.date),
            security_id: require_text(&self.security_id, "security_id")?,
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerAcceptance,
        object_type: ObjectType,
        _ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            date: OcfDate::from(ledger.date),
            security_id: require_text(&ledger.security_id, "security_id")?,
            comments: ledger.comments.clone(),
        })
    }
}

// ============================================================================
// Cancellations
// ============================================================================

impl LedgerTranslator for QuantityCancellation {
    type Ledger = LedgerQuantityCancellation;

    const OBJECT_TYPES: &'static [ObjectType] = &[
        ObjectType::TxStockCancellation,
        ObjectType::TxEquityCompensationCancellation,
    ];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(&self, ctx: &TranslationContext) -> TranslationResult<LedgerQuantityCancellation> {
        ensure_object_type::<Self>(self.object_type)?;
        Ok(LedgerQuantityCancellation {
            id: require_text(&self.id, "id")?,
            date: ledger_time(self.date),
            security_id: require_text(&self.security_id, "security_id")?,
            quantity: ctx.variants().numeric(self.quantity, "quantity")?,
            balance_security_id: self.balance_security_id.clone(),
            reason_text: require_text(&self.reason_text, "reason_text")?,
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerQuantityCancellation,
        object_type: ObjectType,
        _ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            date: OcfDate::from(ledger.date),
            security_id: require_text(&ledger.security_id, "security_id")?,
            quantity: ledger.quantity,
            balance_security_id: optional_text(ledger.balance_security_id.as_ref()),
            reason_text: require_text(&ledger.reason_text, "reason_text")?,
            comments: ledger.comments.clone(),
        })
    }
}

impl LedgerTranslator for ConvertibleCancellation {
    type Ledger = LedgerConvertibleCancellation;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::TxConvertibleCancellation];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(
        &self,
        ctx: &TranslationContext,
    ) -> TranslationResult<LedgerConvertibleCancellation> {
        ensure_object_type::<Self>(self.object_type)?;
        Ok(LedgerConvertibleCancellation {
            id: require_text(&self.id, "id")?,
            date: ledger_time(self.date),
            security_id: require_text(&self.security_id, "security_id")?,
            amount: ctx.variants().monetary(&self.amount, "amount")?,
            balance_security_id: self.balance_security_id.clone(),
            reason_text: require_text(&self.reason_text, "reason_text")?,
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerConvertibleCancellation,
        object_type: ObjectType,
        _ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            date: OcfDate::from(ledger.date),
            security_id: require_text(&ledger.security_id, "security_id")?,
            amount: ledger.amount.clone(),
            balance_security_id: optional_text(ledger.balance_security_id.as_ref()),
            reason_text: require_text(&ledger.reason_text, "reason_text")?,
            comments: ledger.comments.clone(),
        })
    }
}

// ============================================================================
// Transfers
// ============================================================================

impl LedgerTranslator for QuantityTransfer {
    type Ledger = LedgerQuantityTransfer;

    const OBJECT_TYPES: &'static [ObjectType] = &[
        ObjectType::TxStockTransfer,
        ObjectType::TxWarrantTransfer,
        ObjectType::TxEquityCompensationTransfer,
    ];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(&self, ctx: &TranslationContext) -> TranslationResult<LedgerQuantityTransfer> {
        ensure_object_type::<Self>(self.object_type)?;
        require_non_empty(&self.resulting_security_ids, "resulting_security_ids")?;
        Ok(LedgerQuantityTransfer {
            id: require_text(&self.id, "id")?,
            date: ledger_time(self.date),
            security_id: require_text(&self.security_id, "security_id")?,
            quantity: ctx.variants().numeric(self.quantity, "quantity")?,
            resulting_security_ids: self.resulting_security_ids.clone(),
            balance_security_id: self.balance_security_id.clone(),
            consideration_text: self.consideration_text.clone(),
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerQuantityTransfer,
        object_type: ObjectType,
        _ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        require_non_empty(&ledger.resulting_security_ids, "resulting_security_ids")?;
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            date: OcfDate::from(ledger.date),
            security_id: require_text(&ledger.security_id, "security_id")?,
            quantity: ledger.quantity,
            resulting_security_ids: ledger.resulting_security_ids.clone(),
            balance_security_id: optional_text(ledger.balance_security_id.as_ref()),
            consideration_text: optional_text(ledger.consideration_text.as_ref()),
            comments: ledger.comments.clone(),
        })
    }
}

impl LedgerTranslator for ConvertibleTransfer {
    type Ledger = LedgerConvertibleTransfer;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::TxConvertibleTransfer];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(&self, ctx: &TranslationContext) -> TranslationResult<LedgerConvertibleTransfer> {
        ensure_object_type::<Self>(self.object_type)?;
        require_non_empty(&self.resulting_security_ids, "resulting_security_ids")?;
        Ok(LedgerConvertibleTransfer {
            id: require_text(&self.id, "id")?,
            date: ledger_time(self.date),
            security_id: require_text(&self.security_id, "security_id")?,
            amount: ctx.variants().monetary(&self.amount, "amount")?,
            resulting_security_ids: self.resulting_security_ids.clone(),
            balance_security_id: self.balance_security_id.clone(),
            consideration_text: self.consideration_text.clone(),
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerConvertibleTransfer,
        object_type: ObjectType,
        _ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        require_non_empty(&ledger.resulting_security_ids, "resulting_security_ids")?;
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            date: OcfDate::from(ledger.date),
            security_id: require_text(&ledger.security_id, "security_id")?,
            amount: ledger.amount.clone(),
            resulting_security_ids: ledger.resulting_security_ids.clone(),
            balance_security_id: optional_text(ledger.balance_security_id.as_ref()),
            consideration_text: optional_text(ledger.consideration_text.as_ref()),
            comments: ledger.comments.clone(),
        })
    }
}

// ============================================================================
// Exercises
// ============================================================================

impl LedgerTranslator for WarrantExercise {
    type Ledger = LedgerWarrantExercise;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::TxWarrantExercise];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(&self, ctx: &TranslationContext) -> TranslationResult<LedgerWarrantExercise> {
        ensure_object_type::<Self>(self.object_type)?;
        require_non_empty(&self.resulting_security_ids, "resulting_security_ids")?;
        Ok(LedgerWarrantExercise {
            id: require_text(&self.id, "id")?,
            date: ledger_time(self.date),
            security_id: require_text(&self.security_id, "security_id")?,
            trigger_id: require_text(&self.trigger_id, "trigger_id")?,
            quantity: ctx.variants().numeric_opt(self.quantity, "quantity")?,
            resulting_security_ids: self.resulting_security_ids.clone(),
            balance_security_id: self.balance_security_id.clone(),
            consideration_text: self.consideration_text.clone(),
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerWarrantExercise,
        object_type: ObjectType,
        _ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        require_non_empty(&ledger.resulting_security_ids, "resulting_security_ids")?;
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            date: OcfDate::from(ledger.date),
            security_id: require_text(&ledger.security_id, "security_id")?,
            trigger_id: require_text(&ledger.trigger_id, "trigger_id")?,
            quantity: ledger.quantity,
            resulting_security_ids: ledger.resulting_security_ids.clone(),
            balance_security_id: optional_text(ledger.balance_security_id.as_ref()),
            consideration_text: optional_text(ledger.consideration_text.as_ref()),
            comments: ledger.comments.clone(),
        })
    }
}

impl LedgerTranslator for EquityCompensationExercise {
    type Ledger = LedgerEquityCompensationExercise;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::TxEquityCompensationExercise];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(
        &self,
        ctx: &TranslationContext,
    ) -> TranslationResult<LedgerEquityCompensationExercise> {
        ensure_object_type::<Self>(self.object_type)?;
        require_non_empty(&self.resulting_security_ids, "resulting_security_ids")?;
        Ok(LedgerEquityCompensationExercise {
            id: require_text(&self.id, "id")?,
            date: ledger_time(self.date),
            security_id: require_text(&self.security_id, "security_id")?,
            quantity: ctx.variants().numeric(self.quantity, "quantity")?,
            resulting_security_ids: self.resulting_security_ids.clone(),
            consideration_text: self.consideration_text.clone(),
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerEquityCompensationExercise,
        object_type: ObjectType,
        _ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        require_non_empty(&ledger.resulting_security_ids, "resulting_security_ids")?;
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            date: OcfDate::from(ledger.date),
            security_id: require_text(&ledger.security_id, "security_id")?,
            quantity: ledger.quantity,
            resulting_security_ids: ledger.resulting_security_ids.clone(),
            consideration_text: optional_text(ledger.consideration_text.as_ref()),
            comments: ledger.comments.clone(),
        })
    }
}

// ============================================================================
// Retraction and Repurchase
// ============================================================================

impl LedgerTranslator for WarrantRetraction {
    type Ledger = LedgerWarrantRetraction;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::TxWarrantRetraction];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(&self, _ctx: &TranslationContext) -> TranslationResult<LedgerWarrantRetraction> {
        ensure_object_type::<Self>(self.object_type)?;
        Ok(LedgerWarrantRetraction {
            id: require_text(&self.id, "id")?,
            date: ledger_time(self.date),
            security_id: require_text(&self.security_id, "security_id")?,
            reason_text: require_text(&self.reason_text, "reason_text")?,
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerWarrantRetraction,
        object_type: ObjectType,
        _ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            date: OcfDate::from(ledger.date),
            security_id: require_text(&ledger.security_id, "security_id")?,
            reason_text: require_text(&ledger.reason_text, "reason_text")?,
            comments: ledger.comments.clone(),
        })
    }
}

impl LedgerTranslator for StockRepurchase {
    type Ledger = LedgerStockRepurchase;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::TxStockRepurchase];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(&self, ctx: &TranslationContext) -> TranslationResult<LedgerStockRepurchase> {
        ensure_object_type::<Self>(self.object_type)?;
        let variants = ctx.variants();
        Ok(LedgerStockRepurchase {
            id: require_text(&self.id, "id")?,
            date: ledger_time(self.date),
            security_id: require_text(&self.security_id, "security_id")?,
            quantity: variants.numeric(self.quantity, "quantity")?,
            price: variants.monetary(&self.price, "price")?,
            balance_security_id: self.balance_security_id.clone(),
            consideration_text: self.consideration_text.clone(),
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerStockRepurchase,
        object_type: ObjectType,
        _ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            date: OcfDate::from(ledger.date),
            security_id: require_text(&ledger.security_id, "security_id")?,
            quantity: ledger.quantity,
            price: ledger.price.clone(),
            balance_security_id: optional_text(ledger.balance_security_id.as_ref()),
            consideration_text: optional_text(ledger.consideration_text.as_ref()),
            comments: ledger.comments.clone(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::errors::TranslationError;
    use serde_json::json;

    mod shared_shapes {
        use super::*;

        #[test]
        fn acceptance_keeps_requested_object_type() {
            let ctx = TranslationContext::default();
            let ledger = LedgerAcceptance {
                id: "acc-1".to_string(),
                date: OcfDate::parse("2024-05-01").unwrap().into(),
                security_id: "sec-w-1".to_string(),
                comments: vec![],
            };
            let back =
                Acceptance::from_ledger(&ledger, ObjectType::TxWarrantAcceptance, &ctx).unwrap();
            assert_eq!(back.object_type, ObjectType::TxWarrantAcceptance);
        }

        #[test]
        fn foreign_object_type_is_rejected() {
            let ctx = TranslationContext::default();
            let ledger = LedgerAcceptance {
                id: "acc-1".to_string(),
                date: OcfDate::parse("2024-05-01").unwrap().into(),
                security_id: "sec-1".to_string(),
                comments: vec![],
            };
            assert!(matches!(
                Acceptance::from_ledger(&ledger, ObjectType::TxStockTransfer, &ctx),
                Err(TranslationError::ValidationError(_))
            ));
        }
    }

    mod transfers {
        use super::*;

        fn transfer(resulting: serde_json::Value) -> QuantityTransfer {
            serde_json::from_value(json!({
                "object_type": "TX_STOCK_TRANSFER",
                "id": "tr-1",
                "date": "2024-06-30",
                "security_id": "sec-1",
                "quantity": "2500",
                "resulting_security_ids": resulting,
                "balance_security_id": "sec-1b"
            }))
            .unwrap()
        }

        #[test]
        fn transfer_roundtrip() {
            let ctx = TranslationContext::default();
            let record = transfer(json!(["sec-2"]));
            let ledger = record.to_ledger(&ctx).unwrap();
            assert_eq!(ledger.consideration_text, None);
            assert_eq!(
                QuantityTransfer::from_ledger(&ledger, ObjectType::TxStockTransfer, &ctx).unwrap(),
                record
            );
        }

        #[test]
        fn transfer_requires_resulting_securities() {
            assert!(matches!(
                transfer(json!([])).to_ledger(&TranslationContext::default()),
                Err(TranslationError::ValidationError(_))
            ));
        }
    }

    #[test]
    fn blank_reason_is_missing() {
        let cancellation: QuantityCancellation = serde_json::from_value(json!({
            "object_type": "TX_STOCK_CANCELLATION",
            "id": "c-1",
            "date": "2024-07-01",
            "security_id": "sec-1",
            "quantity": "100",
            "reason_text": "   "
        }))
        .unwrap();
        assert_eq!(
            cancellation.to_ledger(&TranslationContext::default()).unwrap_err(),
            TranslationError::missing("reason_text")
        );
    }

    #[test]
    fn repurchase_roundtrip() {
        let ctx = TranslationContext::default();
        let repurchase: StockRepurchase = serde_json::from_value(json!({
            "object_type": "TX_STOCK_REPURCHASE",
            "id": "rp-1",
            "date": "2024-08-01",
            "security_id": "sec-1",
            "quantity": "1000",
            "price": {"amount": "1.25", "currency": "USD"},
            "comments": ["founder departure"]
        }))
        .unwrap();
        let ledger = repurchase.to_ledger(&ctx).unwrap();
        assert_eq!(ledger.price.amount.to_string(), "1.25");
        assert_eq!(
            StockRepurchase::from_ledger(&ledger, ObjectType::TxStockRepurchase, &ctx).unwrap(),
            repurchase
        );
    }
}
