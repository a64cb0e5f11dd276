//! Issuance translators: convertibles, warrants, equity compensation and
//! stock.
//!
//! Convertible and warrant triggers go through the trigger mapper, which
//! owns id synthesis and the strict or lenient handling of missing rights.

use super::{
    ensure_object_type, ledger_time, ledger_time_opt, ocf_date_opt, LedgerTranslator,
    TranslationContext,
};
use crate::application::canonical::{optional_text, require_non_empty, require_text};
use crate::application::trigger_mapper::TriggerParent;
use crate::application::variant_mapper::{ledger_literal, parse_literal};
use crate::domain::errors::TranslationResult;
use crate::domain::interchange::{
    ConvertibleIssuance, EquityCompensationIssuance, StockIssuance, TerminationWindow,
    WarrantIssuance,
};
use crate::domain::ledger::{
    LedgerConvertibleIssuance, LedgerEquityCompensationIssuance, LedgerStockIssuance,
    LedgerTerminationWindow, LedgerWarrantIssuance,
};
use crate::domain::value_objects::{ConvertibleType, ObjectType, OcfDate};

// ============================================================================
// Convertible
// ============================================================================

impl LedgerTranslator for ConvertibleIssuance {
    type Ledger = LedgerConvertibleIssuance;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::TxConvertibleIssuance];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(&self, ctx: &TranslationContext) -> TranslationResult<LedgerConvertibleIssuance> {
        ensure_object_type::<Self>(self.object_type)?;
        let id = require_text(&self.id, "id")?;
        require_non_empty(&self.conversion_triggers, "conversion_triggers")?;
        let parent = TriggerParent::convertible(&id, self.convertible_type);
        let triggers = ctx.triggers().to_ledger(&parent, &self.conversion_triggers)?;
        let variants = ctx.variants();

        Ok(LedgerConvertibleIssuance {
            date: ledger_time(self.date),
            security_id: require_text(&self.security_id, "security_id")?,
            custom_id: require_text(&self.custom_id, "custom_id")?,
            stakeholder_id: require_text(&self.stakeholder_id, "stakeholder_id")?,
            investment_amount: variants.monetary(&self.investment_amount, "investment_amount")?,
            convertible_type: ledger_literal(self.convertible_type),
            conversion_triggers: triggers.triggers,
            seniority: variants.numeric(self.seniority, "seniority")?,
            pro_rata: variants.numeric_opt(self.pro_rata, "pro_rata")?,
            board_approval_date: ledger_time_opt(self.board_approval_date),
            stockholder_approval_date: ledger_time_opt(self.stockholder_approval_date),
            consideration_text: self.consideration_text.clone(),
            security_law_exemptions: self.security_law_exemptions.clone(),
            comments: self.comments.clone(),
            id,
        })
    }

    fn from_ledger(
        ledger: &LedgerConvertibleIssuance,
        object_type: ObjectType,
        ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        let id = require_text(&ledger.id, "id")?;
        require_non_empty(&ledger.conversion_triggers, "conversion_triggers")?;
        let convertible_type: ConvertibleType =
            parse_literal(&ledger.convertible_type, "convertible_type")?;
        let parent = TriggerParent::convertible(&id, convertible_type);
        let triggers = ctx.triggers().from_ledger(&parent, &ledger.conversion_triggers)?;

        Ok(Self {
            object_type,
            date: OcfDate::from(ledger.date),
            security_id: require_text(&ledger.security_id, "security_id")?,
            custom_id: require_text(&ledger.custom_id, "custom_id")?,
            stakeholder_id: require_text(&ledger.stakeholder_id, "stakeholder_id")?,
            investment_amount: ledger.investment_amount.clone(),
            convertible_type,
            conversion_triggers: triggers.triggers,
            seniority: ledger.seniority,
            pro_rata: ledger.pro_rata,
            board_approval_date: ocf_date_opt(ledger.board_approval_date),
            stockholder_approval_date: ocf_date_opt(ledger.stockholder_approval_date),
            consideration_text: optional_text(ledger.consideration_text.as_ref()),
            security_law_exemptions: ledger.security_law_exemptions.clone(),
            comments: ledger.comments.clone(),
            id,
        })
    }
}

// ============================================================================
// Warrant
// ============================================================================

impl LedgerTranslator for WarrantIssuance {
    type Ledger = LedgerWarrantIssuance;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::TxWarrantIssuance];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(&self, ctx: &TranslationContext) -> TranslationResult<LedgerWarrantIssuance> {
        ensure_object_type::<Self>(self.object_type)?;
        let id = require_text(&self.id, "id")?;
        require_non_empty(&self.exercise_triggers, "exercise_triggers")?;
        let triggers = ctx
            .triggers()
            .to_ledger(&TriggerParent::warrant(&id), &self.exercise_triggers)?;
        let variants = ctx.variants();

        Ok(LedgerWarrantIssuance {
            date: ledger_time(self.date),
            security_id: require_text(&self.security_id, "security_id")?,
            custom_id: require_text(&self.custom_id, "custom_id")?,
            stakeholder_id: require_text(&self.stakeholder_id, "stakeholder_id")?,
            quantity: variants.numeric_opt(self.quantity, "quantity")?,
            exercise_price: variants.monetary_opt(self.exercise_price.as_ref(), "exercise_price")?,
            purchase_price: variants.monetary(&self.purchase_price, "purchase_price")?,
            exercise_triggers: triggers.triggers,
            warrant_expiration_date: ledger_time_opt(self.warrant_expiration_date),
            vesting_terms_id: self.vesting_terms_id.clone(),
            board_approval_date: ledger_time_opt(self.board_approval_date),
            stockholder_approval_date: ledger_time_opt(self.stockholder_approval_date),
            consideration_text: self.consideration_text.clone(),
            security_law_exemptions: self.security_law_exemptions.clone(),
            comments: self.comments.clone(),
            id,
        })
    }

    fn from_ledger(
        ledger: &LedgerWarrantIssuance,
        object_type: ObjectType,
        ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        let id = require_text(&ledger.id, "id")?;
        require_non_empty(&ledger.exercise_triggers, "exercise_triggers")?;
        let triggers = ctx
            .triggers()
            .from_ledger(&TriggerParent::warrant(&id), &ledger.exercise_triggers)?;

        Ok(Self {
            object_type,
            date: OcfDate::from(ledger.date),
            security_id: require_text(&ledger.security_id, "security_id")?,
            custom_id: require_text(&ledger.custom_id, "custom_id")?,
            stakeholder_id: require_text(&ledger.stakeholder_id, "stakeholder_id")?,
            quantity: ledger.quantity,
            exercise_price: ledger.exercise_price.clone(),
            purchase_price: ledger.purchase_price.clone(),
            exercise_triggers: triggers.triggers,
            warrant_expiration_date: ocf_date_opt(ledger.warrant_expiration_date),
            vesting_terms_id: optional_text(ledger.vesting_terms_id.as_ref()),
            board_approval_date: ocf_date_opt(ledger.board_approval_date),
            stockholder_approval_date: ocf_date_opt(ledger.stockholder_approval_date),
            consideration_text: optional_text(ledger.consideration_text.as_ref()),
            security_law_exemptions: ledger.security_law_exemptions.clone(),
            comments: ledger.comments.clone(),
            id,
        })
    }
}

// ============================================================================
// Equity Compensation
// ============================================================================

fn window_to_ledger(window: &TerminationWindow) -> LedgerTerminationWindow {
    LedgerTerminationWindow {
        reason: ledger_literal(window.reason),
        period: window.period,
        period_type: ledger_literal(window.period_type),
    }
}

fn window_from_ledger(window: &LedgerTerminationWindow) -> TranslationResult<TerminationWindow> {
    Ok(TerminationWindow {
        reason: parse_literal(&window.reason, "reason")?,
        period: window.period,
        period_type: parse_literal(&window.period_type, "period_type")?,
    })
}

impl LedgerTranslator for EquityCompensationIssuance {
    type Ledger = LedgerEquityCompensationIssuance;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::TxEquityCompensationIssuance];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(
        &self,
        ctx: &TranslationContext,
    ) -> TranslationResult<LedgerEquityCompensationIssuance> {
        ensure_object_type::<Self>(self.object_type)?;
        let variants = ctx.variants();
        Ok(LedgerEquityCompensationIssuance {
            id: require_text(&self.id, "id")?,
            date: ledger_time(self.date),
            security_id: require_text(&self.security_id, "security_id")?,
            custom_id: require_text(&self.custom_id, "custom_id")?,
            stakeholder_id: require_text(&self.stakeholder_id, "stakeholder_id")?,
            compensation_type: ledger_literal(self.compensation_type),
            quantity: variants.numeric(self.quantity, "quantity")?,
            exercise_price: variants.monetary_opt(self.exercise_price.as_ref(), "exercise_price")?,
            base_price: variants.monetary_opt(self.base_price.as_ref(), "base_price")?,
            stock_plan_id: self.stock_plan_id.clone(),
            stock_class_id: self.stock_class_id.clone(),
            vesting_terms_id: self.vesting_terms_id.clone(),
            expiration_date: ledger_time_opt(self.expiration_date),
            early_exercisable: self.early_exercisable,
            board_approval_date: ledger_time_opt(self.board_approval_date),
            stockholder_approval_date: ledger_time_opt(self.stockholder_approval_date),
            consideration_text: self.consideration_text.clone(),
            security_law_exemptions: self.security_law_exemptions.clone(),
            termination_exercise_windows: self
                .termination_exercise_windows
                .iter()
                .map(window_to_ledger)
                .collect(),
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerEquityCompensationIssuance,
        object_type: ObjectType,
        _ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        let termination_exercise_windows = ledger
            .termination_exercise_windows
            .iter()
            .enumerate()
            .map(|(i, window)| {
                window_from_ledger(window)
                    .map_err(|e| e.within(&format!("termination_exercise_windows[{i}]")))
            })
            .collect::<TranslationResult<_>>()?;

        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            date: OcfDate::from(ledger.date),
            security_id: require_text(&ledger.security_id, "security_id")?,
            custom_id: require_text(&ledger.custom_id, "custom_id")?,
            stakeholder_id: require_text(&ledger.stakeholder_id, "stakeholder_id")?,
            compensation_type: parse_literal(&ledger.compensation_type, "compensation_type")?,
            quantity: ledger.quantity,
            exercise_price: ledger.exercise_price.clone(),
            base_price: ledger.base_price.clone(),
            stock_plan_id: optional_text(ledger.stock_plan_id.as_ref()),
            stock_class_id: optional_text(ledger.stock_class_id.as_ref()),
            vesting_terms_id: optional_text(ledger.vesting_terms_id.as_ref()),
            expiration_date: ocf_date_opt(ledger.expiration_date),
            early_exercisable: ledger.early_exercisable,
            board_approval_date: ocf_date_opt(ledger.board_approval_date),
            stockholder_approval_date: ocf_date_opt(ledger.stockholder_approval_date),
            consideration_text: optional_text(ledger.consideration_text.as_ref()),
            security_law_exemptions: ledger.security_law_exemptions.clone(),
            termination_exercise_windows,
            comments: ledger.comments.clone(),
        })
    }
}

// ============================================================================
// Stock
// ============================================================================

impl LedgerTranslator for StockIssuance {
    type Ledger = LedgerStockIssuance;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::TxStockIssuance];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(&self, ctx: &TranslationContext) -> TranslationResult<LedgerStockIssuance> {
        ensure_object_type::<Self>(self.object_type)?;
        let variants = ctx.variants();
        Ok(LedgerStockIssuance {
            id: require_text(&self.id, "id")?,
            date: ledger_time(self.date),
            security_id: require_text(&self.security_id, "security_id")?,
            custom_id: require_text(&self.custom_id, "custom_id")?,
            stakeholder_id: require_text(&self.stakeholder_id, "stakeholder_id")?,
            stock_class_id: require_text(&self.stock_class_id, "stock_class_id")?,
            share_price: variants.monetary(&self.share_price, "share_price")?,
            quantity: variants.numeric(self.quantity, "quantity")?,
            stock_plan_id: self.stock_plan_id.clone(),
            vesting_terms_id: self.vesting_terms_id.clone(),
            cost_basis: variants.monetary_opt(self.cost_basis.as_ref(), "cost_basis")?,
            board_approval_date: ledger_time_opt(self.board_approval_date),
            stockholder_approval_date: ledger_time_opt(self.stockholder_approval_date),
            consideration_text: self.consideration_text.clone(),
            stock_legend_ids: self.stock_legend_ids.clone(),
            security_law_exemptions: self.security_law_exemptions.clone(),
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerStockIssuance,
        object_type: ObjectType,
        _ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            date: OcfDate::from(ledger.date),
            security_id: require_text(&ledger.security_id, "security_id")?,
            custom_id: require_text(&ledger.custom_id, "custom_id")?,
            stakeholder_id: require_text(&ledger.stakeholder_id, "stakeholder_id")?,
            stock_class_id: require_text(&ledger.stock_class_id, "stock_class_id")?,
            share_price: ledger.share_price.clone(),
            quantity: ledger.quantity,
            stock_plan_id: optional_text(ledger.stock_plan_id.as_ref()),
            vesting_terms_id: optional_text(ledger.vesting_terms_id.as_ref()),
            cost_basis: ledger.cost_basis.clone(),
            board_approval_date: ocf_date_opt(ledger.board_approval_date),
            stockholder_approval_date: ocf_date_opt(ledger.stockholder_approval_date),
            consideration_text: optional_text(ledger.consideration_text.as_ref()),
            stock_legend_ids: ledger.stock_legend_ids.clone(),
            security_law_exemptions: ledger.security_law_exemptions.clone(),
            comments: ledger.comments.clone(),
        })
    }
}
