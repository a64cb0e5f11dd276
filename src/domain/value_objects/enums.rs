//! # Closed Enumerations
//!
//! Every enumerated interchange field has a fixed literal on each side: the
//! interchange literal (`"ACTUAL_365"`) and the ledger literal
//! (`"OcfDayCountActual365"`). The tables below are total in both
//! directions; an unmatched literal is a [`TranslationError::UnknownVariantTag`]
//! naming the table and the literal.
//!
//! # Examples
//!
//! ```
//! use ocf_ledger::domain::value_objects::enums::AccrualPeriod;
//!
//! let period: AccrualPeriod = "SEMI_ANNUAL".parse().unwrap();
//! assert_eq!(period.ledger_tag(), "OcfAccrualSemiAnnual");
//! assert_eq!(AccrualPeriod::from_ledger_tag("OcfAccrualSemiAnnual").unwrap(), period);
//! assert!(AccrualPeriod::from_ledger_tag("OcfAccrualWeekly").is_err());
//! ```

use crate::domain::errors::{TranslationError, TranslationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A closed enumeration with a ledger literal per variant.
///
/// Implemented by every table in this module so mappers can convert
/// optional and repeated enum fields generically.
pub trait LedgerLiteral: Copy + Sized {
    /// Returns the ledger literal.
    fn ledger_literal(self) -> &'static str;

    /// Maps a ledger literal back to the variant.
    ///
    /// # Errors
    ///
    /// Returns `UnknownVariantTag` for any literal outside the table.
    fn from_ledger_literal(tag: &str) -> TranslationResult<Self>;
}

/// Declares a closed enumeration with its interchange and ledger literals.
macro_rules! ledger_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $union:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $ir:literal, $ledger:literal;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $ir)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Name of the table, used in error messages.
            pub const UNION: &'static str = $union;

            /// Returns the interchange literal.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $ir,)+
                }
            }

            /// Returns the ledger literal.
            #[must_use]
            pub const fn ledger_tag(self) -> &'static str {
                match self {
                    $(Self::$variant => $ledger,)+
                }
            }

            /// Maps a ledger literal back to the variant.
            ///
            /// # Errors
            ///
            /// Returns `UnknownVariantTag` for any literal outside the table.
            pub fn from_ledger_tag(tag: &str) -> TranslationResult<Self> {
                match tag {
                    $($ledger => Ok(Self::$variant),)+
                    other => Err(TranslationError::unknown_tag($union, other)),
                }
            }
        }

        impl LedgerLiteral for $name {
            fn ledger_literal(self) -> &'static str {
                self.ledger_tag()
            }

            fn from_ledger_literal(tag: &str) -> TranslationResult<Self> {
                Self::from_ledger_tag(tag)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TranslationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($ir => Ok(Self::$variant),)+
                    other => Err(TranslationError::unknown_tag($union, other)),
                }
            }
        }
    };
}

// ============================================================================
// Convertible Note Terms
// ============================================================================

ledger_enum! {
    /// Day-count convention for note interest.
    pub enum DayCountConvention as "DayCountConvention" {
        /// Actual days over a 365-day year.
        Actual365 => "ACTUAL_365", "OcfDayCountActual365";
        /// 30-day months over a 360-day year.
        Thirty360 => "30_360", "OcfDayCount30_360";
    }
}

ledger_enum! {
    /// When note interest is paid out.
    pub enum InterestPayout as "InterestPayout" {
        /// Accrued and paid at conversion.
        Deferred => "DEFERRED", "OcfInterestPayoutDeferred";
        /// Paid in cash.
        Cash => "CASH", "OcfInterestPayoutCash";
    }
}

ledger_enum! {
    /// Simple or compound interest.
    pub enum CompoundingType as "CompoundingType" {
        /// Simple interest.
        Simple => "SIMPLE", "OcfSimple";
        /// Compound interest.
        Compounding => "COMPOUNDING", "OcfCompounding";
    }
}

ledger_enum! {
    /// Interest accrual period.
    pub enum AccrualPeriod as "AccrualPeriod" {
        /// Daily.
        Daily => "DAILY", "OcfAccrualDaily";
        /// Monthly.
        Monthly => "MONTHLY", "OcfAccrualMonthly";
        /// Quarterly.
        Quarterly => "QUARTERLY", "OcfAccrualQuarterly";
        /// Twice a year.
        SemiAnnual => "SEMI_ANNUAL", "OcfAccrualSemiAnnual";
        /// Yearly.
        Annual => "ANNUAL", "OcfAccrualAnnual";
    }
}

ledger_enum! {
    /// Whether a SAFE converts on a pre- or post-money basis.
    pub enum ConversionTiming as "ConversionTiming" {
        /// Pre-money.
        PreMoney => "PRE_MONEY", "OcfConversionTimingPreMoney";
        /// Post-money.
        PostMoney => "POST_MONEY", "OcfConversionTimingPostMoney";
    }
}

// ============================================================================
// Triggers
// ============================================================================

ledger_enum! {
    /// Conversion and exercise trigger types.
    pub enum TriggerType as "TriggerType" {
        /// Converts automatically once a condition is met.
        AutomaticOnCondition => "AUTOMATIC_ON_CONDITION", "OcfTriggerTypeAutomaticOnCondition";
        /// Converts automatically on a date.
        AutomaticOnDate => "AUTOMATIC_ON_DATE", "OcfTriggerTypeAutomaticOnDate";
        /// Holder may elect to convert within a date range.
        ElectiveInRange => "ELECTIVE_IN_RANGE", "OcfTriggerTypeElectiveInRange";
        /// Holder may elect to convert once a condition is met.
        ElectiveOnCondition => "ELECTIVE_ON_CONDITION", "OcfTriggerTypeElectiveOnCondition";
        /// Holder may elect to convert at any time.
        ElectiveAtWill => "ELECTIVE_AT_WILL", "OcfTriggerTypeElectiveAtWill";
        /// Not specified.
        Unspecified => "UNSPECIFIED", "OcfTriggerTypeUnspecified";
    }
}

impl TriggerType {
    /// Parses an interchange literal, also accepting the legacy aliases
    /// `AUTOMATIC` (automatic on condition) and `OPTIONAL` (elective at will).
    ///
    /// # Errors
    ///
    /// Returns `UnknownVariantTag` for anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocf_ledger::domain::value_objects::enums::TriggerType;
    ///
    /// assert_eq!(
    ///     TriggerType::parse_with_aliases("AUTOMATIC").unwrap(),
    ///     TriggerType::AutomaticOnCondition
    /// );
    /// assert_eq!(
    ///     TriggerType::parse_with_aliases("OPTIONAL").unwrap(),
    ///     TriggerType::ElectiveAtWill
    /// );
    /// ```
    pub fn parse_with_aliases(literal: &str) -> TranslationResult<Self> {
        match literal {
            "AUTOMATIC" => Ok(Self::AutomaticOnCondition),
            "OPTIONAL" => Ok(Self::ElectiveAtWill),
            other => other.parse(),
        }
    }
}

ledger_enum! {
    /// The kind of conversion right embedded in a trigger or stock class.
    pub enum ConversionRightType as "ConversionRightType" {
        /// Right attached to a convertible trigger.
        Convertible => "CONVERTIBLE_CONVERSION_RIGHT", "OcfRightConvertible";
        /// Right attached to a warrant exercise trigger.
        Warrant => "WARRANT_CONVERSION_RIGHT", "OcfRightWarrant";
        /// Right carried by a stock class.
        StockClass => "STOCK_CLASS_CONVERSION_RIGHT", "OcfRightStockClass";
    }
}

ledger_enum! {
    /// Mechanism kinds a stock class conversion right may use. The ledger
    /// flattens the mechanism into a literal plus optional fields.
    pub enum StockClassMechanismKind as "StockClassConversionMechanism" {
        /// Converts at a fixed ratio.
        Ratio => "RATIO_CONVERSION", "OcfConversionMechanismRatioConversion";
        /// Converts into a percentage of capitalization.
        PercentCapitalization => "PERCENT_CAPITALIZATION_CONVERSION",
            "OcfConversionMechanismPercentCapitalizationConversion";
        /// Converts into a fixed number of shares.
        FixedAmount => "FIXED_AMOUNT_CONVERSION", "OcfConversionMechanismFixedAmountConversion";
    }
}

// ============================================================================
// Parties and Classes
// ============================================================================

ledger_enum! {
    /// Stakeholder kind.
    pub enum StakeholderType as "StakeholderType" {
        /// A natural person.
        Individual => "INDIVIDUAL", "OcfStakeholderTypeIndividual";
        /// A legal entity.
        Institution => "INSTITUTION", "OcfStakeholderTypeInstitution";
    }
}

ledger_enum! {
    /// Relationship of a stakeholder to the issuer.
    pub enum StakeholderRelationship as "StakeholderRelationship" {
        /// Advisor.
        Advisor => "ADVISOR", "OcfRelAdvisor";
        /// Board member.
        BoardMember => "BOARD_MEMBER", "OcfRelBoardMember";
        /// Consultant.
        Consultant => "CONSULTANT", "OcfRelConsultant";
        /// Employee.
        Employee => "EMPLOYEE", "OcfRelEmployee";
        /// Former advisor.
        ExAdvisor => "EX_ADVISOR", "OcfRelExAdvisor";
        /// Former consultant.
        ExConsultant => "EX_CONSULTANT", "OcfRelExConsultant";
        /// Former employee.
        ExEmployee => "EX_EMPLOYEE", "OcfRelExEmployee";
        /// Executive.
        Executive => "EXECUTIVE", "OcfRelExecutive";
        /// Founder.
        Founder => "FOUNDER", "OcfRelFounder";
        /// Investor.
        Investor => "INVESTOR", "OcfRelInvestor";
        /// Employee outside the US.
        NonUsEmployee => "NON_US_EMPLOYEE", "OcfRelNonUsEmployee";
        /// Officer.
        Officer => "OFFICER", "OcfRelOfficer";
        /// Other.
        Other => "OTHER", "OcfRelOther";
    }
}

ledger_enum! {
    /// Stock class kind.
    pub enum StockClassType as "StockClassType" {
        /// Common stock.
        Common => "COMMON", "OcfStockClassTypeCommon";
        /// Preferred stock.
        Preferred => "PREFERRED", "OcfStockClassTypePreferred";
    }
}

ledger_enum! {
    /// Convertible instrument kind.
    pub enum ConvertibleType as "ConvertibleType" {
        /// Convertible note.
        Note => "NOTE", "OcfConvertibleNote";
        /// Simple agreement for future equity.
        Safe => "SAFE", "OcfConvertibleSafe";
        /// Other convertible security.
        Security => "SECURITY", "OcfConvertibleSecurity";
    }
}

ledger_enum! {
    /// Equity compensation kind.
    pub enum CompensationType as "CompensationType" {
        /// Incentive stock option.
        OptionIso => "OPTION_ISO", "OcfCompensationTypeOptionISO";
        /// Non-qualified stock option.
        OptionNso => "OPTION_NSO", "OcfCompensationTypeOptionNSO";
        /// Option without tax qualification.
        Option => "OPTION", "OcfCompensationTypeOption";
        /// Restricted stock unit.
        Rsu => "RSU", "OcfCompensationTypeRSU";
        /// Cash-settled stock appreciation right.
        Csar => "CSAR", "OcfCompensationTypeCSAR";
        /// Stock-settled stock appreciation right.
        Ssar => "SSAR", "OcfCompensationTypeSSAR";
    }
}

ledger_enum! {
    /// Rounding rule for ratio conversions.
    pub enum RoundingType as "RoundingType" {
        /// Round up.
        Ceiling => "CEILING", "OcfRoundingCeiling";
        /// Round down.
        Floor => "FLOOR", "OcfRoundingFloor";
        /// Round half up.
        Normal => "NORMAL", "OcfRoundingNormal";
    }
}

ledger_enum! {
    /// Valuation kind.
    pub enum ValuationType as "ValuationType" {
        /// Section 409A valuation.
        Valuation409A => "409A", "OcfValuationType409A";
    }
}

ledger_enum! {
    /// What happens to cancelled plan securities.
    pub enum StockPlanCancellationBehavior as "StockPlanCancellationBehavior" {
        /// Shares are retired.
        Retire => "RETIRE", "OcfPlanCancelRetire";
        /// Shares return to the plan pool.
        ReturnToPool => "RETURN_TO_POOL", "OcfPlanCancelReturnToPool";
        /// Shares are held as capital stock.
        HoldAsCapitalStock => "HOLD_AS_CAPITAL_STOCK", "OcfPlanCancelHoldAsCapitalStock";
        /// Defined by each plan security.
        DefinedPerPlanSecurity => "DEFINED_PER_PLAN_SECURITY",
            "OcfPlanCancelDefinedPerPlanSecurity";
    }
}

ledger_enum! {
    /// How fractional shares are allocated across vesting tranches.
    pub enum AllocationType as "AllocationType" {
        /// Cumulative rounding.
        CumulativeRounding => "CUMULATIVE_ROUNDING", "OcfAllocationCumulativeRounding";
        /// Cumulative round down.
        CumulativeRoundDown => "CUMULATIVE_ROUND_DOWN", "OcfAllocationCumulativeRoundDown";
        /// Remainder in early tranches.
        FrontLoaded => "FRONT_LOADED", "OcfAllocationFrontLoaded";
        /// Remainder in late tranches.
        BackLoaded => "BACK_LOADED", "OcfAllocationBackLoaded";
        /// Remainder in the first tranche.
        FrontLoadedToSingleTranche => "FRONT_LOADED_TO_SINGLE_TRANCHE",
            "OcfAllocationFrontLoadedToSingleTranche";
        /// Remainder in the last tranche.
        BackLoadedToSingleTranche => "BACK_LOADED_TO_SINGLE_TRANCHE",
            "OcfAllocationBackLoadedToSingleTranche";
        /// Fractional shares allowed.
        Fractional => "FRACTIONAL", "OcfAllocationFractional";
    }
}

ledger_enum! {
    /// Unit of a relative vesting period.
    pub enum VestingPeriodUnit as "VestingPeriodUnit" {
        /// Days.
        Days => "DAYS", "OcfVestingPeriodDays";
        /// Months.
        Months => "MONTHS", "OcfVestingPeriodMonths";
    }
}

ledger_enum! {
    /// Unit of a post-termination exercise window.
    pub enum WindowPeriodUnit as "WindowPeriodUnit" {
        /// Days.
        Days => "DAYS", "OcfPeriodDays";
        /// Months.
        Months => "MONTHS", "OcfPeriodMonths";
        /// Years.
        Years => "YEARS", "OcfPeriodYears";
    }
}

ledger_enum! {
    /// Reason a holder's service terminated.
    pub enum TerminationWindowReason as "TerminationWindowReason" {
        /// Voluntary, other.
        VoluntaryOther => "VOLUNTARY_OTHER", "OcfTermVoluntaryOther";
        /// Voluntary for good cause.
        VoluntaryGoodCause => "VOLUNTARY_GOOD_CAUSE", "OcfTermVoluntaryGoodCause";
        /// Voluntary retirement.
        VoluntaryRetirement => "VOLUNTARY_RETIREMENT", "OcfTermVoluntaryRetirement";
        /// Involuntary, other.
        InvoluntaryOther => "INVOLUNTARY_OTHER", "OcfTermInvoluntaryOther";
        /// Death.
        InvoluntaryDeath => "INVOLUNTARY_DEATH", "OcfTermInvoluntaryDeath";
        /// Disability.
        InvoluntaryDisability => "INVOLUNTARY_DISABILITY", "OcfTermInvoluntaryDisability";
        /// Termination with cause.
        InvoluntaryWithCause => "INVOLUNTARY_WITH_CAUSE", "OcfTermInvoluntaryWithCause";
    }
}

// ============================================================================
// Contact Details
// ============================================================================

ledger_enum! {
    /// Email address kind.
    pub enum EmailType as "EmailType" {
        /// Personal.
        Personal => "PERSONAL", "OcfEmailTypePersonal";
        /// Business.
        Business => "BUSINESS", "OcfEmailTypeBusiness";
        /// Other.
        Other => "OTHER", "OcfEmailTypeOther";
    }
}

ledger_enum! {
    /// Phone number kind.
    pub enum PhoneType as "PhoneType" {
        /// Home.
        Home => "HOME", "OcfPhoneHome";
        /// Mobile.
        Mobile => "MOBILE", "OcfPhoneMobile";
        /// Business.
        Business => "BUSINESS", "OcfPhoneBusiness";
        /// Other.
        Other => "OTHER", "OcfPhoneOther";
    }
}

ledger_enum! {
    /// Address kind.
    pub enum AddressType as "AddressType" {
        /// Legal address.
        Legal => "LEGAL", "OcfAddressTypeLegal";
        /// Contact address.
        Contact => "CONTACT", "OcfAddressTypeContact";
        /// Other.
        Other => "OTHER", "OcfAddressTypeOther";
    }
}

// ============================================================================
// Authorized Shares
// ============================================================================

ledger_enum! {
    /// Non-numeric authorized share counts.
    pub enum AuthorizedSharesSentinel as "AuthorizedShares" {
        /// No limit on authorized shares.
        Unlimited => "UNLIMITED", "OcfAuthorizedSharesUnlimited";
        /// Authorized shares do not apply.
        NotApplicable => "NOT_APPLICABLE", "OcfAuthorizedSharesNotApplicable";
    }
}
