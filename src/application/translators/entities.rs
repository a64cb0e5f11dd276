//! Issuer, stakeholder, stock class, stock plan and valuation translators.

use super::{
    ensure_object_type, ledger_time, ledger_time_opt, ocf_date_opt, LedgerTranslator,
    TranslationContext,
};
use crate::application::canonical::{map_optional, optional_text, require_non_empty, require_text};
use crate::application::variant_mapper::{
    ledger_literal, ledger_literal_opt, ledger_literals, parse_literal, parse_literal_opt,
    parse_literals,
};
use crate::domain::errors::{TranslationError, TranslationResult};
use crate::domain::interchange::{
    Address, ContactInfo, Email, Issuer, Name, Phone, Stakeholder, StockClass, StockPlan, Valuation,
};
use crate::domain::ledger::{
    LedgerAddress, LedgerContactInfo, LedgerEmail, LedgerIssuer, LedgerName, LedgerPhone,
    LedgerStakeholder, LedgerStockClass, LedgerStockPlan, LedgerValuation,
};
use crate::domain::value_objects::{ObjectType, OcfDate};

// ============================================================================
// Contact Records
// ============================================================================

fn name_to_ledger(name: &Name, field: &str) -> TranslationResult<LedgerName> {
    Ok(LedgerName {
        legal_name: require_text(&name.legal_name, &format!("{field}.legal_name"))?,
        first_name: name.first_name.clone(),
        last_name: name.last_name.clone(),
    })
}

fn name_from_ledger(name: &LedgerName, field: &str) -> TranslationResult<Name> {
    Ok(Name {
        legal_name: require_text(&name.legal_name, &format!("{field}.legal_name"))?,
        first_name: optional_text(name.first_name.as_ref()),
        last_name: optional_text(name.last_name.as_ref()),
    })
}

fn email_to_ledger(email: &Email) -> LedgerEmail {
    LedgerEmail {
        email_type: ledger_literal(email.email_type),
        email_address: email.email_address.clone(),
    }
}

fn email_from_ledger(email: &LedgerEmail) -> TranslationResult<Email> {
    Ok(Email {
        email_type: parse_literal(&email.email_type, "email_type")?,
        email_address: email.email_address.clone(),
    })
}

fn phone_to_ledger(phone: &Phone) -> LedgerPhone {
    LedgerPhone {
        phone_type: ledger_literal(phone.phone_type),
        phone_number: phone.phone_number.clone(),
    }
}

fn phone_from_ledger(phone: &LedgerPhone) -> TranslationResult<Phone> {
    Ok(Phone {
        phone_type: parse_literal(&phone.phone_type, "phone_type")?,
        phone_number: phone.phone_number.clone(),
    })
}

fn address_to_ledger(address: &Address) -> LedgerAddress {
    LedgerAddress {
        address_type: ledger_literal(address.address_type),
        street_suite: address.street_suite.clone(),
        city: address.city.clone(),
        country_subdivision: address.country_subdivision.clone(),
        country: address.country.clone(),
        postal_code: address.postal_code.clone(),
    }
}

fn address_from_ledger(address: &LedgerAddress) -> TranslationResult<Address> {
    Ok(Address {
        address_type: parse_literal(&address.address_type, "address_type")?,
        street_suite: optional_text(address.street_suite.as_ref()),
        city: optional_text(address.city.as_ref()),
        country_subdivision: optional_text(address.country_subdivision.as_ref()),
        country: address.country.clone(),
        postal_code: optional_text(address.postal_code.as_ref()),
    })
}

fn contact_to_ledger(contact: &ContactInfo) -> TranslationResult<LedgerContactInfo> {
    Ok(LedgerContactInfo {
        name: name_to_ledger(&contact.name, "primary_contact.name")?,
        phone_numbers: contact.phone_numbers.iter().map(phone_to_ledger).collect(),
        emails: contact.emails.iter().map(email_to_ledger).collect(),
    })
}

fn contact_from_ledger(contact: &LedgerContactInfo) -> TranslationResult<ContactInfo> {
    Ok(ContactInfo {
        name: name_from_ledger(&contact.name, "primary_contact.name")?,
        phone_numbers: contact
            .phone_numbers
            .iter()
            .map(phone_from_ledger)
            .collect::<TranslationResult<_>>()?,
        emails: contact
            .emails
            .iter()
            .map(email_from_ledger)
            .collect::<TranslationResult<_>>()?,
    })
}

// ============================================================================
// Issuer
// ============================================================================

impl LedgerTranslator for Issuer {
    type Ledger = LedgerIssuer;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::Issuer];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(&self, ctx: &TranslationContext) -> TranslationResult<LedgerIssuer> {
        ensure_object_type::<Self>(self.object_type)?;
        let variants = ctx.variants();
        Ok(LedgerIssuer {
            id: require_text(&self.id, "id")?,
            legal_name: require_text(&self.legal_name, "legal_name")?,
            formation_date: ledger_time(self.formation_date),
            country_of_formation: require_text(&self.country_of_formation, "country_of_formation")?,
            dba: self.dba.clone(),
            country_subdivision_of_formation: self.country_subdivision_of_formation.clone(),
            tax_ids: self.tax_ids.clone(),
            email: self.email.as_ref().map(email_to_ledger),
            phone: self.phone.as_ref().map(phone_to_ledger),
            address: self.address.as_ref().map(address_to_ledger),
            initial_shares_authorized: self
                .initial_shares_authorized
                .map(|shares| {
                    variants.authorized_shares_to_ledger(shares, "initial_shares_authorized")
                })
                .transpose()?,
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerIssuer,
        object_type: ObjectType,
        ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        let variants = ctx.variants();
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            legal_name: require_text(&ledger.legal_name, "legal_name")?,
            formation_date: OcfDate::from(ledger.formation_date),
            country_of_formation: require_text(
                &ledger.country_of_formation,
                "country_of_formation",
            )?,
            dba: optional_text(ledger.dba.as_ref()),
            country_subdivision_of_formation: optional_text(
                ledger.country_subdivision_of_formation.as_ref(),
            ),
            tax_ids: ledger.tax_ids.clone(),
            email: map_optional(ledger.email.as_ref(), email_from_ledger)?,
            phone: map_optional(ledger.phone.as_ref(), phone_from_ledger)?,
            address: map_optional(ledger.address.as_ref(), address_from_ledger)?,
            initial_shares_authorized: map_optional(ledger.initial_shares_authorized.as_ref(), |v| {
                variants.authorized_shares_from_ledger(v, "initial_shares_authorized")
            })?,
            comments: ledger.comments.clone(),
        })
    }
}

// ============================================================================
// Stakeholder
// ============================================================================

impl LedgerTranslator for Stakeholder {
    type Ledger = LedgerStakeholder;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::Stakeholder];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(&self, _ctx: &TranslationContext) -> TranslationResult<LedgerStakeholder> {
        ensure_object_type::<Self>(self.object_type)?;
        Ok(LedgerStakeholder {
            id: require_text(&self.id, "id")?,
            name: name_to_ledger(&self.name, "name")?,
            stakeholder_type: ledger_literal(self.stakeholder_type),
            issuer_assigned_id: self.issuer_assigned_id.clone(),
            current_relationships: ledger_literals(&self.current_relationships),
            primary_contact: map_optional(self.primary_contact.as_ref(), contact_to_ledger)?,
            addresses: self.addresses.iter().map(address_to_ledger).collect(),
            tax_ids: self.tax_ids.clone(),
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerStakeholder,
        object_type: ObjectType,
        _ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            name: name_from_ledger(&ledger.name, "name")?,
            stakeholder_type: parse_literal(&ledger.stakeholder_type, "stakeholder_type")?,
            issuer_assigned_id: optional_text(ledger.issuer_assigned_id.as_ref()),
            current_relationships: parse_literals(&ledger.current_relationships)?,
            primary_contact: map_optional(ledger.primary_contact.as_ref(), contact_from_ledger)?,
            addresses: ledger
                .addresses
                .iter()
                .map(address_from_ledger)
                .collect::<TranslationResult<_>>()?,
            tax_ids: ledger.tax_ids.clone(),
            comments: ledger.comments.clone(),
        })
    }
}

// ============================================================================
// Stock Class
// ============================================================================

impl LedgerTranslator for StockClass {
    type Ledger = LedgerStockClass;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::StockClass];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(&self, ctx: &TranslationContext) -> TranslationResult<LedgerStockClass> {
        ensure_object_type::<Self>(self.object_type)?;
        let variants = ctx.variants();
        let conversion_rights = self
            .conversion_rights
            .iter()
            .enumerate()
            .map(|(i, right)| {
                variants
                    .stock_class_right_to_ledger(right)
                    .map_err(|e| e.within(&format!("conversion_rights[{i}]")))
            })
            .collect::<TranslationResult<_>>()?;

        Ok(LedgerStockClass {
            id: require_text(&self.id, "id")?,
            name: require_text(&self.name, "name")?,
            class_type: ledger_literal(self.class_type),
            default_id_prefix: require_text(&self.default_id_prefix, "default_id_prefix")?,
            initial_shares_authorized: variants.authorized_shares_to_ledger(
                self.initial_shares_authorized,
                "initial_shares_authorized",
            )?,
            votes_per_share: variants.numeric(self.votes_per_share, "votes_per_share")?,
            seniority: variants.numeric(self.seniority, "seniority")?,
            board_approval_date: ledger_time_opt(self.board_approval_date),
            stockholder_approval_date: ledger_time_opt(self.stockholder_approval_date),
            par_value: variants.monetary_opt(self.par_value.as_ref(), "par_value")?,
            price_per_share: variants
                .monetary_opt(self.price_per_share.as_ref(), "price_per_share")?,
            conversion_rights,
            liquidation_preference_multiple: variants.numeric_opt(
                self.liquidation_preference_multiple,
                "liquidation_preference_multiple",
            )?,
            participation_cap_multiple: variants
                .numeric_opt(self.participation_cap_multiple, "participation_cap_multiple")?,
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerStockClass,
        object_type: ObjectType,
        ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        let variants = ctx.variants();
        let conversion_rights = ledger
            .conversion_rights
            .iter()
            .enumerate()
            .map(|(i, right)| {
                variants
                    .stock_class_right_from_ledger(right)
                    .map_err(|e| e.within(&format!("conversion_rights[{i}]")))
            })
            .collect::<TranslationResult<_>>()?;

        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            name: require_text(&ledger.name, "name")?,
            class_type: parse_literal(&ledger.class_type, "class_type")?,
            default_id_prefix: require_text(&ledger.default_id_prefix, "default_id_prefix")?,
            initial_shares_authorized: variants.authorized_shares_from_ledger(
                &ledger.initial_shares_authorized,
                "initial_shares_authorized",
            )?,
            votes_per_share: ledger.votes_per_share,
            seniority: ledger.seniority,
            board_approval_date: ocf_date_opt(ledger.board_approval_date),
            stockholder_approval_date: ocf_date_opt(ledger.stockholder_approval_date),
            par_value: ledger.par_value.clone(),
            price_per_share: ledger.price_per_share.clone(),
            conversion_rights,
            liquidation_preference_multiple: ledger.liquidation_preference_multiple,
            participation_cap_multiple: ledger.participation_cap_multiple,
            comments: ledger.comments.clone(),
        })
    }
}

// ============================================================================
// Stock Plan
// ============================================================================

impl LedgerTranslator for StockPlan {
    type Ledger = LedgerStockPlan;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::StockPlan];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(&self, ctx: &TranslationContext) -> TranslationResult<LedgerStockPlan> {
        ensure_object_type::<Self>(self.object_type)?;
        require_non_empty(&self.stock_class_ids, "stock_class_ids")?;
        Ok(LedgerStockPlan {
            id: require_text(&self.id, "id")?,
            plan_name: require_text(&self.plan_name, "plan_name")?,
            initial_shares_reserved: ctx
                .variants()
                .numeric(self.initial_shares_reserved, "initial_shares_reserved")?,
            stock_class_ids: self.stock_class_ids.clone(),
            board_approval_date: ledger_time_opt(self.board_approval_date),
            stockholder_approval_date: ledger_time_opt(self.stockholder_approval_date),
            default_cancellation_behavior: ledger_literal_opt(self.default_cancellation_behavior),
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerStockPlan,
        object_type: ObjectType,
        _ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        require_non_empty(&ledger.stock_class_ids, "stock_class_ids")?;
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            plan_name: require_text(&ledger.plan_name, "plan_name")?,
            initial_shares_reserved: ledger.initial_shares_reserved,
            stock_class_ids: ledger.stock_class_ids.clone(),
            board_approval_date: ocf_date_opt(ledger.board_approval_date),
            stockholder_approval_date: ocf_date_opt(ledger.stockholder_approval_date),
            default_cancellation_behavior: parse_literal_opt(
                ledger.default_cancellation_behavior.as_ref(),
            )?,
            comments: ledger.comments.clone(),
        })
    }
}

// ============================================================================
// Valuation
// ============================================================================

impl LedgerTranslator for Valuation {
    type Ledger = LedgerValuation;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::Valuation];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(&self, ctx: &TranslationContext) -> TranslationResult<LedgerValuation> {
        ensure_object_type::<Self>(self.object_type)?;
        Ok(LedgerValuation {
            id: require_text(&self.id, "id")?,
            stock_class_id: require_text(&self.stock_class_id, "stock_class_id")?,
            provider: self.provider.clone(),
            board_approval_date: ledger_time_opt(self.board_approval_date),
            price_per_share: ctx.variants().monetary(&self.price_per_share, "price_per_share")?,
            effective_date: ledger_time(self.effective_date),
            valuation_type: ledger_literal(self.valuation_type),
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerValuation,
        object_type: ObjectType,
        _ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        if ledger.price_per_share.currency.trim().is_empty() {
            return Err(TranslationError::missing("price_per_share.currency"));
        }
        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            stock_class_id: require_text(&ledger.stock_class_id, "stock_class_id")?,
            provider: optional_text(ledger.provider.as_ref()),
            board_approval_date: ocf_date_opt(ledger.board_approval_date),
            price_per_share: ledger.price_per_share.clone(),
            effective_date: OcfDate::from(ledger.effective_date),
            valuation_type: parse_literal(&ledger.valuation_type, "valuation_type")?,
            comments: ledger.comments.clone(),
        })
    }
}
