//! Capitalization adjustment translators.

use super::{
    ensure_object_type, ledger_time, ledger_time_opt, ocf_date_opt, LedgerTranslator,
    TranslationContext,
};
use crate::application::canonical::require_text;
use crate::domain::errors::TranslationResult;
use crate::domain::interchange::{
    IssuerAuthorizedSharesAdjustment, StockClassAuthorizedSharesAdjustment,
    StockClassConversionRatioAdjustment, StockClassSplit, StockPlanPoolAdjustment,
};
use crate::domain::ledger::{
    LedgerIssuerAuthorizedSharesAdjustment, LedgerStockClassAuthorizedSharesAdjustment,
    LedgerStockClassConversionRatioAdjustment, LedgerStockClassSplit,
    LedgerStockPlanPoolAdjustment,
};
use crate::domain::value_objects::{ObjectType, OcfDate};

impl LedgerTranslator for IssuerAuthorizedSharesAdjustment {
    type Ledger = LedgerIssuerAuthorizedSharesAdjustment;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::TxIssuerAuthorizedSharesAdjustment];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(
        &self,
        ctx: &TranslationContext,
    ) -> TranslationResult<LedgerIssuerAuthorizedSharesAdjustment> {
        ensure_object_type::<Self>(self.object_type)?;
        Ok(LedgerIssuerAuthorizedSharesAdjustment {
            id: require_text(&self.id, "id")?,
            date: ledger_time(self.date),
            issuer_id: require_text(&self.issuer_id, "issuer_id")?,
            new_shares_authorized: ctx
                .variants()
                .authorized_shares_to_ledger(self.new_shares_authorized, "new_shares_authorized")?,
            board_approval_date: ledger_time_opt(self.board_approval_date),
            stockholder_approval_date: ledger_time_opt(self.stockholder_approval_date),
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerIssuerAuthorizedSharesAdjustment,
        object_type: ObjectType,
        ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            date: OcfDate::from(ledger.date),
            issuer_id: require_text(&ledger.issuer_id, "issuer_id")?,
            new_shares_authorized: ctx.variants().authorized_shares_from_ledger(
                &ledger.new_shares_authorized,
                "new_shares_authorized",
            )?,
            board_approval_date: ocf_date_opt(ledger.board_approval_date),
            stockholder_approval_date: ocf_date_opt(ledger.stockholder_approval_date),
            comments: ledger.comments.clone(),
        })
    }
}

impl LedgerTranslator for StockClassAuthorizedSharesAdjustment {
    type Ledger = LedgerStockClassAuthorizedSharesAdjustment;

    const OBJECT_TYPES: &'static [ObjectType] =
        &[ObjectType::TxStockClassAuthorizedSharesAdjustment];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(
        &self,
        ctx: &TranslationContext,
    ) -> TranslationResult<LedgerStockClassAuthorizedSharesAdjustment> {
        ensure_object_type::<Self>(self.object_type)?;
        Ok(LedgerStockClassAuthorizedSharesAdjustment {
            id: require_text(&self.id, "id")?,
            date: ledger_time(self.date),
            stock_class_id: require_text(&self.stock_class_id, "stock_class_id")?,
            new_shares_authorized: ctx
                .variants()
                .authorized_shares_to_ledger(self.new_shares_authorized, "new_shares_authorized")?,
            board_approval_date: ledger_time_opt(self.board_approval_date),
            stockholder_approval_date: ledger_time_opt(self.stockholder_approval_date),
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerStockClassAuthorizedSharesAdjustment,
        object_type: ObjectType,
        ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            date: OcfDate::from(ledger.date),
            stock_class_id: require_text(&ledger.stock_class_id, "stock_class_id")?,
            new_shares_authorized: ctx.variants().authorized_shares_from_ledger(
                &ledger.new_shares_authorized,
                "new_shares_authorized",
            )?,
            board_approval_date: ocf_date_opt(ledger.board_approval_date),
            stockholder_approval_date: ocf_date_opt(ledger.stockholder_approval_date),
            comments: ledger.comments.clone(),
        })
    }
}

impl LedgerTranslator for StockClassConversionRatioAdjustment {
    type Ledger = LedgerStockClassConversionRatioAdjustment;

    const OBJECT_TYPES: &'static [ObjectType] =
        &[ObjectType::TxStockClassConversionRatioAdjustment];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(
        &self,
        ctx: &TranslationContext,
    ) -> TranslationResult<LedgerStockClassConversionRatioAdjustment> {
        ensure_object_type::<Self>(self.object_type)?;
        Ok(LedgerStockClassConversionRatioAdjustment {
            id: require_text(&self.id, "id")?,
            date: ledger_time(self.date),
            stock_class_id: require_text(&self.stock_class_id, "stock_class_id")?,
            new_ratio_conversion_mechanism: ctx
                .variants()
                .ratio_conversion_to_ledger(&self.new_ratio_conversion_mechanism)
                .map_err(|e| e.within("new_ratio_conversion_mechanism"))?,
            board_approval_date: ledger_time_opt(self.board_approval_date),
            stockholder_approval_date: ledger_time_opt(self.stockholder_approval_date),
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerStockClassConversionRatioAdjustment,
        object_type: ObjectType,
        ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            date: OcfDate::from(ledger.date),
            stock_class_id: require_text(&ledger.stock_class_id, "stock_class_id")?,
            new_ratio_conversion_mechanism: ctx
                .variants()
                .ratio_conversion_from_ledger(&ledger.new_ratio_conversion_mechanism)
                .map_err(|e| e.within("new_ratio_conversion_mechanism"))?,
            board_approval_date: ocf_date_opt(ledger.board_approval_date),
            stockholder_approval_date: ocf_date_opt(ledger.stockholder_approval_date),
            comments: ledger.comments.clone(),
        })
    }
}

impl LedgerTranslator for StockClassSplit {
    type Ledger = LedgerStockClassSplit;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::TxStockClassSplit];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(&self, ctx: &TranslationContext) -> TranslationResult<LedgerStockClassSplit> {
        ensure_object_type::<Self>(self.object_type)?;
        Ok(LedgerStockClassSplit {
            id: require_text(&self.id, "id")?,
            date: ledger_time(self.date),
            stock_class_id: require_text(&self.stock_class_id, "stock_class_id")?,
            split_ratio: ctx.variants().ratio(&self.split_ratio, "split_ratio")?,
            board_approval_date: ledger_time_opt(self.board_approval_date),
            stockholder_approval_date: ledger_time_opt(self.stockholder_approval_date),
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerStockClassSplit,
        object_type: ObjectType,
        _ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        ledger.split_ratio.validate("split_ratio")?;
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            date: OcfDate::from(ledger.date),
            stock_class_id: require_text(&ledger.stock_class_id, "stock_class_id")?,
            split_ratio: ledger.split_ratio,
            board_approval_date: ocf_date_opt(ledger.board_approval_date),
            stockholder_approval_date: ocf_date_opt(ledger.stockholder_approval_date),
            comments: ledger.comments.clone(),
        })
    }
}

impl LedgerTranslator for StockPlanPoolAdjustment {
    type Ledger = LedgerStockPlanPoolAdjustment;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::TxStockPlanPoolAdjustment];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(
        &self,
        ctx: &TranslationContext,
    ) -> TranslationResult<LedgerStockPlanPoolAdjustment> {
        ensure_object_type::<Self>(self.object_type)?;
        Ok(LedgerStockPlanPoolAdjustment {
            id: require_text(&self.id, "id")?,
            date: ledger_time(self.date),
            stock_plan_id: require_text(&self.stock_plan_id, "stock_plan_id")?,
            shares_reserved: ctx.variants().numeric(self.shares_reserved, "shares_reserved")?,
            board_approval_date: ledger_time_opt(self.board_approval_date),
            stockholder_approval_date: ledger_time_opt(self.stockholder_approval_date),
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerStockPlanPoolAdjustment,
        object_type: ObjectType,
        _ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            date: OcfDate::from(ledger.date),
            stock_plan_id: require_text(&ledger.stock_plan_id, "stock_plan_id")?,
            shares_reserved: ledger.shares_reserved,
            board_approval_date: ocf_date_opt(ledger.board_approval_date),
            stockholder_approval_date: ocf_date_opt(ledger.stockholder_approval_date),
            comments: ledger.comments.clone(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::errors::TranslationError;
    use crate::domain::ledger::{TAG_AUTHORIZED_ENUM, TAG_AUTHORIZED_NUMERIC};
    use serde_json::json;

    fn issuer_adjustment(shares: serde_json::Value) -> IssuerAuthorizedSharesAdjustment {
        serde_json::from_value(json!({
            "object_type": "TX_ISSUER_AUTHORIZED_SHARES_ADJUSTMENT",
            "id": "adj-1",
            "date": "2024-09-01",
            "issuer_id": "issuer-1",
            "new_shares_authorized": shares,
            "board_approval_date": "2024-08-15"
        }))
        .unwrap()
    }

    mod authorized_shares {
        use super::*;

        #[test]
        fn numeric_count_roundtrip() {
            let ctx = TranslationContext::default();
            let adjustment = issuer_adjustment(json!("20000000"));
            let ledger = adjustment.to_ledger(&ctx).unwrap();
            assert_eq!(ledger.new_shares_authorized.tag, TAG_AUTHORIZED_NUMERIC);
            assert_eq!(ledger.stockholder_approval_date, None);
            assert_eq!(
                IssuerAuthorizedSharesAdjustment::from_ledger(
                    &ledger,
                    ObjectType::TxIssuerAuthorizedSharesAdjustment,
                    &ctx
                )
                .unwrap(),
                adjustment
            );
        }

        #[test]
        fn sentinel_roundtrip() {
            let ctx = TranslationContext::default();
            let adjustment = issuer_adjustment(json!("UNLIMITED"));
            let ledger = adjustment.to_ledger(&ctx).unwrap();
            assert_eq!(ledger.new_shares_authorized.tag, TAG_AUTHORIZED_ENUM);
            assert_eq!(ledger.new_shares_authorized.value, json!("OcfAuthorizedSharesUnlimited"));
            assert_eq!(
                IssuerAuthorizedSharesAdjustment::from_ledger(
                    &ledger,
                    ObjectType::TxIssuerAuthorizedSharesAdjustment,
                    &ctx
                )
                .unwrap(),
                adjustment
            );
        }

        #[test]
        fn unknown_constructor_is_rejected() {
            let ctx = TranslationContext::default();
            let mut ledger = issuer_adjustment(json!("100")).to_ledger(&ctx).unwrap();
            ledger.new_shares_authorized.tag = "OcfAuthorizedSharesBogus".to_string();
            assert_eq!(
                IssuerAuthorizedSharesAdjustment::from_ledger(
                    &ledger,
                    ObjectType::TxIssuerAuthorizedSharesAdjustment,
                    &ctx
                )
                .unwrap_err()
                .code(),
                1002
            );
        }
    }

    #[test]
    fn conversion_ratio_adjustment_roundtrip() {
        let ctx = TranslationContext::default();
        let adjustment: StockClassConversionRatioAdjustment = serde_json::from_value(json!({
            "object_type": "TX_STOCK_CLASS_CONVERSION_RATIO_ADJUSTMENT",
            "id": "ratio-1",
            "date": "2024-10-01",
            "stock_class_id": "sc-pref-a",
            "new_ratio_conversion_mechanism": {
                "conversion_price": {"amount": "1.00", "currency": "USD"},
                "ratio": {"numerator": "3", "denominator": "2"},
                "rounding_type": "FLOOR"
            }
        }))
        .unwrap();
        let ledger = adjustment.to_ledger(&ctx).unwrap();
        assert_eq!(ledger.new_ratio_conversion_mechanism.rounding_type, "OcfRoundingFloor");
        assert_eq!(
            StockClassConversionRatioAdjustment::from_ledger(
                &ledger,
                ObjectType::TxStockClassConversionRatioAdjustment,
                &ctx
            )
            .unwrap(),
            adjustment
        );
    }

    #[test]
    fn split_with_zero_denominator_is_rejected() {
        let split: StockClassSplit = serde_json::from_value(json!({
            "object_type": "TX_STOCK_CLASS_SPLIT",
            "id": "split-1",
            "date": "2024-11-01",
            "stock_class_id": "sc-common",
            "split_ratio": {"numerator": "2", "denominator": "0"}
        }))
        .unwrap();
        assert!(matches!(
            split.to_ledger(&TranslationContext::default()),
            Err(TranslationError::ValidationError(_))
        ));
    }

    #[test]
    fn pool_adjustment_requires_plan() {
        let adjustment: StockPlanPoolAdjustment = serde_json::from_value(json!({
            "object_type": "TX_STOCK_PLAN_POOL_ADJUSTMENT",
            "id": "pool-1",
            "date": "2024-12-01",
            "stock_plan_id": "",
            "shares_reserved": "1500000"
        }))
        .unwrap();
        assert_eq!(
            adjustment.to_ledger(&TranslationContext::default()).unwrap_err(),
            TranslationError::missing("stock_plan_id")
        );
    }
}
