//! The built-in demo data set.
//!
//! Seeded collections for every screen plus the demo sign-in password.
//! Constructors return owned vectors so each view takes its own copy and
//! mutates it locally without affecting anyone else.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use clementine_core::{
    ActivityId, ActivityKind, Email, LeadId, LeadStatus, Money, OpportunityId, PipelineStage,
    Priority, Role, TaskId, TaskKind, TaskStatus, TemplateId, UserId,
};

use crate::models::{
    Activity, DashboardMetrics, EmailTemplate, FunnelStage, Lead, LeadSourceShare,
    MonthlyPerformance, Opportunity, PerformanceSnapshot, Task, TeamMemberStats, UserProfile,
};

/// The password every demo account accepts.
pub const DEMO_PASSWORD: &str = "demo123";

// Seeded values are literals, so these cannot fail.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seeded date")
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("valid seeded time")
}

fn email(raw: &str) -> Email {
    Email::parse(raw).expect("valid seeded email")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

/// The seeded user catalog.
#[must_use]
pub fn users() -> Vec<UserProfile> {
    vec![
        UserProfile {
            id: UserId::new("U001"),
            name: "John Smith".to_owned(),
            email: email("john.smith@company.com"),
            role: Role::SalesRep,
            avatar: "JS".to_owned(),
            department: "Sales".to_owned(),
            performance: PerformanceSnapshot {
                leads_assigned: 45,
                deals_won: 12,
                revenue: Money::from_dollars(485_000),
                tasks_completed: 89,
            },
        },
        UserProfile {
            id: UserId::new("U002"),
            name: "Emily Davis".to_owned(),
            email: email("emily.davis@company.com"),
            role: Role::SalesRep,
            avatar: "ED".to_owned(),
            department: "Sales".to_owned(),
            performance: PerformanceSnapshot {
                leads_assigned: 38,
                deals_won: 9,
                revenue: Money::from_dollars(320_000),
                tasks_completed: 76,
            },
        },
        UserProfile {
            id: UserId::new("U003"),
            name: "Sarah Wilson".to_owned(),
            email: email("sarah.wilson@company.com"),
            role: Role::Manager,
            avatar: "SW".to_owned(),
            department: "Sales".to_owned(),
            performance: PerformanceSnapshot {
                leads_assigned: 52,
                deals_won: 15,
                revenue: Money::from_dollars(580_000),
                tasks_completed: 102,
            },
        },
        UserProfile {
            id: UserId::new("U004"),
            name: "Admin User".to_owned(),
            email: email("admin@company.com"),
            role: Role::Admin,
            avatar: "AU".to_owned(),
            department: "Management".to_owned(),
            performance: PerformanceSnapshot {
                leads_assigned: 0,
                deals_won: 0,
                revenue: Money::ZERO,
                tasks_completed: 45,
            },
        },
    ]
}

/// The seeded lead book.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn leads() -> Vec<Lead> {
    vec![
        Lead {
            id: LeadId::new("L001"),
            name: "Sarah Johnson".to_owned(),
            email: email("sarah.johnson@techcorp.com"),
            phone: "+1 (555) 123-4567".to_owned(),
            company: "TechCorp Solutions".to_owned(),
            status: LeadStatus::Engaged,
            priority: Priority::High,
            owner: "John Smith".to_owned(),
            created_at: date(2024, 12, 1),
            last_activity: date(2024, 12, 10),
            source: "Website".to_owned(),
            industry: "Technology".to_owned(),
            deal_value: Money::from_dollars(85_000),
            tags: strings(&["Enterprise", "Q1 Target"]),
        },
        Lead {
            id: LeadId::new("L002"),
            name: "Michael Chen".to_owned(),
            email: email("mchen@globalinc.com"),
            phone: "+1 (555) 234-5678".to_owned(),
            company: "Global Industries".to_owned(),
            status: LeadStatus::Opportunity,
            priority: Priority::High,
            owner: "Emily Davis".to_owned(),
            created_at: date(2024, 11, 15),
            last_activity: date(2024, 12, 9),
            source: "Referral".to_owned(),
            industry: "Manufacturing".to_owned(),
            deal_value: Money::from_dollars(120_000),
            tags: strings(&["Manufacturing", "Hot Lead"]),
        },
        Lead {
            id: LeadId::new("L003"),
            name: "Jessica Williams".to_owned(),
            email: email("jwilliams@startupxyz.io"),
            phone: "+1 (555) 345-6789".to_owned(),
            company: "StartupXYZ".to_owned(),
            status: LeadStatus::New,
            priority: Priority::Medium,
            owner: "John Smith".to_owned(),
            created_at: date(2024, 12, 8),
            last_activity: date(2024, 12, 8),
            source: "LinkedIn".to_owned(),
            industry: "SaaS".to_owned(),
            deal_value: Money::from_dollars(35_000),
            tags: strings(&["Startup", "SaaS"]),
        },
        Lead {
            id: LeadId::new("L004"),
            name: "Robert Martinez".to_owned(),
            email: email("rmartinez@financepro.com"),
            phone: "+1 (555) 456-7890".to_owned(),
            company: "FinancePro LLC".to_owned(),
            status: LeadStatus::Cold,
            priority: Priority::Low,
            owner: "Sarah Wilson".to_owned(),
            created_at: date(2024, 10, 20),
            last_activity: date(2024, 11, 5),
            source: "Trade Show".to_owned(),
            industry: "Finance".to_owned(),
            deal_value: Money::from_dollars(50_000),
            tags: strings(&["Finance", "Reactivate"]),
        },
        Lead {
            id: LeadId::new("L005"),
            name: "Amanda Brown".to_owned(),
            email: email("abrown@healthplus.org"),
            phone: "+1 (555) 567-8901".to_owned(),
            company: "HealthPlus Medical".to_owned(),
            status: LeadStatus::Engaged,
            priority: Priority::High,
            owner: "Emily Davis".to_owned(),
            created_at: date(2024, 11, 28),
            last_activity: date(2024, 12, 10),
            source: "Website".to_owned(),
            industry: "Healthcare".to_owned(),
            deal_value: Money::from_dollars(95_000),
            tags: strings(&["Healthcare", "Enterprise"]),
        },
        Lead {
            id: LeadId::new("L006"),
            name: "David Kim".to_owned(),
            email: email("dkim@retailmax.com"),
            phone: "+1 (555) 678-9012".to_owned(),
            company: "RetailMax Corp".to_owned(),
            status: LeadStatus::Won,
            priority: Priority::High,
            owner: "John Smith".to_owned(),
            created_at: date(2024, 10, 1),
            last_activity: date(2024, 12, 5),
            source: "Referral".to_owned(),
            industry: "Retail".to_owned(),
            deal_value: Money::from_dollars(150_000),
            tags: strings(&["Retail", "Closed"]),
        },
        Lead {
            id: LeadId::new("L007"),
            name: "Lisa Thompson".to_owned(),
            email: email("lthompson@edutech.edu"),
            phone: "+1 (555) 789-0123".to_owned(),
            company: "EduTech Institute".to_owned(),
            status: LeadStatus::Opportunity,
            priority: Priority::Medium,
            owner: "Sarah Wilson".to_owned(),
            created_at: date(2024, 11, 10),
            last_activity: date(2024, 12, 8),
            source: "Webinar".to_owned(),
            industry: "Education".to_owned(),
            deal_value: Money::from_dollars(65_000),
            tags: strings(&["Education", "Demo Scheduled"]),
        },
        Lead {
            id: LeadId::new("L008"),
            name: "James Anderson".to_owned(),
            email: email("janderson@constructco.com"),
            phone: "+1 (555) 890-1234".to_owned(),
            company: "ConstructCo".to_owned(),
            status: LeadStatus::New,
            priority: Priority::Medium,
            owner: "Emily Davis".to_owned(),
            created_at: date(2024, 12, 9),
            last_activity: date(2024, 12, 9),
            source: "Website".to_owned(),
            industry: "Construction".to_owned(),
            deal_value: Money::from_dollars(78_000),
            tags: strings(&["Construction"]),
        },
        Lead {
            id: LeadId::new("L009"),
            name: "Michelle Garcia".to_owned(),
            email: email("mgarcia@mediagroup.com"),
            phone: "+1 (555) 901-2345".to_owned(),
            company: "Media Group Inc".to_owned(),
            status: LeadStatus::Lost,
            priority: Priority::Medium,
            owner: "John Smith".to_owned(),
            created_at: date(2024, 9, 15),
            last_activity: date(2024, 11, 20),
            source: "Cold Call".to_owned(),
            industry: "Media".to_owned(),
            deal_value: Money::from_dollars(45_000),
            tags: strings(&["Media", "Lost to Competitor"]),
        },
        Lead {
            id: LeadId::new("L010"),
            name: "Christopher Lee".to_owned(),
            email: email("clee@logisticspro.com"),
            phone: "+1 (555) 012-3456".to_owned(),
            company: "LogisticsPro".to_owned(),
            status: LeadStatus::Engaged,
            priority: Priority::High,
            owner: "Sarah Wilson".to_owned(),
            created_at: date(2024, 11, 25),
            last_activity: date(2024, 12, 10),
            source: "Partner".to_owned(),
            industry: "Logistics".to_owned(),
            deal_value: Money::from_dollars(110_000),
            tags: strings(&["Logistics", "Enterprise", "Priority"]),
        },
    ]
}

/// The seeded pipeline.
#[must_use]
pub fn opportunities() -> Vec<Opportunity> {
    vec![
        Opportunity {
            id: OpportunityId::new("OPP001"),
            name: "TechCorp Enterprise License".to_owned(),
            lead_id: LeadId::new("L001"),
            lead_name: "Sarah Johnson".to_owned(),
            stage: PipelineStage::Negotiation,
            value: Money::from_dollars(85_000),
            probability: 75,
            owner: "John Smith".to_owned(),
            expected_close_date: date(2024, 12, 31),
            created_at: date(2024, 12, 5),
            products: strings(&["Enterprise Suite", "Premium Support"]),
            notes: "Final pricing discussion scheduled for next week.".to_owned(),
        },
        Opportunity {
            id: OpportunityId::new("OPP002"),
            name: "Global Industries Implementation".to_owned(),
            lead_id: LeadId::new("L002"),
            lead_name: "Michael Chen".to_owned(),
            stage: PipelineStage::Proposal,
            value: Money::from_dollars(120_000),
            probability: 60,
            owner: "Emily Davis".to_owned(),
            expected_close_date: date(2025, 1, 15),
            created_at: date(2024, 11, 20),
            products: strings(&["Full Platform", "Integration Services", "Training"]),
            notes: "Proposal sent, awaiting feedback from procurement.".to_owned(),
        },
        Opportunity {
            id: OpportunityId::new("OPP003"),
            name: "HealthPlus Annual Contract".to_owned(),
            lead_id: LeadId::new("L005"),
            lead_name: "Amanda Brown".to_owned(),
            stage: PipelineStage::Qualification,
            value: Money::from_dollars(95_000),
            probability: 40,
            owner: "Emily Davis".to_owned(),
            expected_close_date: date(2025, 2, 1),
            created_at: date(2024, 12, 1),
            products: strings(&["Healthcare Module", "Compliance Package"]),
            notes: "Initial requirements gathering in progress.".to_owned(),
        },
        Opportunity {
            id: OpportunityId::new("OPP004"),
            name: "RetailMax Expansion".to_owned(),
            lead_id: LeadId::new("L006"),
            lead_name: "David Kim".to_owned(),
            stage: PipelineStage::ClosedWon,
            value: Money::from_dollars(150_000),
            probability: 100,
            owner: "John Smith".to_owned(),
            expected_close_date: date(2024, 12, 5),
            created_at: date(2024, 10, 15),
            products: strings(&["Retail Suite", "Analytics Add-on", "API Access"]),
            notes: "Contract signed. Implementation starts January.".to_owned(),
        },
        Opportunity {
            id: OpportunityId::new("OPP005"),
            name: "EduTech Pilot Program".to_owned(),
            lead_id: LeadId::new("L007"),
            lead_name: "Lisa Thompson".to_owned(),
            stage: PipelineStage::Proposal,
            value: Money::from_dollars(65_000),
            probability: 55,
            owner: "Sarah Wilson".to_owned(),
            expected_close_date: date(2025, 1, 20),
            created_at: date(2024, 11, 15),
            products: strings(&["Education Module", "Student Management"]),
            notes: "Demo completed successfully. Preparing proposal.".to_owned(),
        },
        Opportunity {
            id: OpportunityId::new("OPP006"),
            name: "LogisticsPro Integration".to_owned(),
            lead_id: LeadId::new("L010"),
            lead_name: "Christopher Lee".to_owned(),
            stage: PipelineStage::Negotiation,
            value: Money::from_dollars(110_000),
            probability: 70,
            owner: "Sarah Wilson".to_owned(),
            expected_close_date: date(2024, 12, 28),
            created_at: date(2024, 11, 28),
            products: strings(&["Logistics Module", "Fleet Management", "API Integration"]),
            notes: "Discussing discount for multi-year commitment.".to_owned(),
        },
    ]
}

/// The seeded task list.
#[must_use]
pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: TaskId::new("T001"),
            title: "Follow-up call with Sarah Johnson".to_owned(),
            description: "Discuss enterprise license pricing and timeline".to_owned(),
            lead_id: LeadId::new("L001"),
            lead_name: "Sarah Johnson".to_owned(),
            assignee: "John Smith".to_owned(),
            due_date: date(2024, 12, 11),
            priority: Priority::High,
            status: TaskStatus::Pending,
            kind: TaskKind::Call,
        },
        Task {
            id: TaskId::new("T002"),
            title: "Send proposal to Global Industries".to_owned(),
            description: "Prepare and send updated proposal with implementation timeline"
                .to_owned(),
            lead_id: LeadId::new("L002"),
            lead_name: "Michael Chen".to_owned(),
            assignee: "Emily Davis".to_owned(),
            due_date: date(2024, 12, 12),
            priority: Priority::High,
            status: TaskStatus::InProgress,
            kind: TaskKind::Email,
        },
        Task {
            id: TaskId::new("T003"),
            title: "Product demo for StartupXYZ".to_owned(),
            description: "Schedule and conduct product demonstration".to_owned(),
            lead_id: LeadId::new("L003"),
            lead_name: "Jessica Williams".to_owned(),
            assignee: "John Smith".to_owned(),
            due_date: date(2024, 12, 13),
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            kind: TaskKind::Demo,
        },
        Task {
            id: TaskId::new("T004"),
            title: "Re-engagement call with FinancePro".to_owned(),
            description: "Attempt to re-engage cold lead with new offerings".to_owned(),
            lead_id: LeadId::new("L004"),
            lead_name: "Robert Martinez".to_owned(),
            assignee: "Sarah Wilson".to_owned(),
            due_date: date(2024, 12, 14),
            priority: Priority::Low,
            status: TaskStatus::Pending,
            kind: TaskKind::Call,
        },
        Task {
            id: TaskId::new("T005"),
            title: "Meeting with HealthPlus team".to_owned(),
            description: "Requirements gathering session with IT and procurement".to_owned(),
            lead_id: LeadId::new("L005"),
            lead_name: "Amanda Brown".to_owned(),
            assignee: "Emily Davis".to_owned(),
            due_date: date(2024, 12, 11),
            priority: Priority::High,
            status: TaskStatus::Pending,
            kind: TaskKind::Meeting,
        },
        Task {
            id: TaskId::new("T006"),
            title: "Contract review for RetailMax".to_owned(),
            description: "Review and finalize contract terms".to_owned(),
            lead_id: LeadId::new("L006"),
            lead_name: "David Kim".to_owned(),
            assignee: "John Smith".to_owned(),
            due_date: date(2024, 12, 10),
            priority: Priority::High,
            status: TaskStatus::Completed,
            kind: TaskKind::FollowUp,
        },
        Task {
            id: TaskId::new("T007"),
            title: "Send case studies to EduTech".to_owned(),
            description: "Share relevant education industry case studies".to_owned(),
            lead_id: LeadId::new("L007"),
            lead_name: "Lisa Thompson".to_owned(),
            assignee: "Sarah Wilson".to_owned(),
            due_date: date(2024, 12, 12),
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            kind: TaskKind::Email,
        },
        Task {
            id: TaskId::new("T008"),
            title: "Initial outreach to ConstructCo".to_owned(),
            description: "First contact call to understand requirements".to_owned(),
            lead_id: LeadId::new("L008"),
            lead_name: "James Anderson".to_owned(),
            assignee: "Emily Davis".to_owned(),
            due_date: date(2024, 12, 15),
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            kind: TaskKind::Call,
        },
    ]
}

/// The seeded activity feed.
#[must_use]
pub fn activities() -> Vec<Activity> {
    vec![
        Activity {
            id: ActivityId::new("A001"),
            kind: ActivityKind::Call,
            lead_id: LeadId::new("L001"),
            lead_name: "Sarah Johnson".to_owned(),
            description: "Discussed enterprise features and pricing structure".to_owned(),
            user: "John Smith".to_owned(),
            timestamp: at(2024, 12, 10, 14, 30),
            outcome: Some("Positive - Moving to negotiation".to_owned()),
        },
        Activity {
            id: ActivityId::new("A002"),
            kind: ActivityKind::Email,
            lead_id: LeadId::new("L002"),
            lead_name: "Michael Chen".to_owned(),
            description: "Sent updated proposal with revised pricing".to_owned(),
            user: "Emily Davis".to_owned(),
            timestamp: at(2024, 12, 10, 11, 15),
            outcome: None,
        },
        Activity {
            id: ActivityId::new("A003"),
            kind: ActivityKind::Meeting,
            lead_id: LeadId::new("L005"),
            lead_name: "Amanda Brown".to_owned(),
            description: "Product demo with healthcare compliance team".to_owned(),
            user: "Emily Davis".to_owned(),
            timestamp: at(2024, 12, 9, 15, 0),
            outcome: Some("Interested in compliance features".to_owned()),
        },
        Activity {
            id: ActivityId::new("A004"),
            kind: ActivityKind::TaskCompleted,
            lead_id: LeadId::new("L006"),
            lead_name: "David Kim".to_owned(),
            description: "Contract signed and deal closed".to_owned(),
            user: "John Smith".to_owned(),
            timestamp: at(2024, 12, 5, 16, 45),
            outcome: Some("Deal Won - $150,000".to_owned()),
        },
        Activity {
            id: ActivityId::new("A005"),
            kind: ActivityKind::Note,
            lead_id: LeadId::new("L010"),
            lead_name: "Christopher Lee".to_owned(),
            description: "Client interested in 3-year commitment for additional discount"
                .to_owned(),
            user: "Sarah Wilson".to_owned(),
            timestamp: at(2024, 12, 10, 9, 30),
            outcome: None,
        },
        Activity {
            id: ActivityId::new("A006"),
            kind: ActivityKind::Call,
            lead_id: LeadId::new("L007"),
            lead_name: "Lisa Thompson".to_owned(),
            description: "Follow-up call after demo - very positive feedback".to_owned(),
            user: "Sarah Wilson".to_owned(),
            timestamp: at(2024, 12, 8, 10, 0),
            outcome: Some("Demo successful".to_owned()),
        },
        Activity {
            id: ActivityId::new("A007"),
            kind: ActivityKind::Email,
            lead_id: LeadId::new("L003"),
            lead_name: "Jessica Williams".to_owned(),
            description: "Sent welcome email with product overview".to_owned(),
            user: "John Smith".to_owned(),
            timestamp: at(2024, 12, 8, 8, 30),
            outcome: None,
        },
        Activity {
            id: ActivityId::new("A008"),
            kind: ActivityKind::Call,
            lead_id: LeadId::new("L009"),
            lead_name: "Michelle Garcia".to_owned(),
            description: "Final call - chose competitor solution".to_owned(),
            user: "John Smith".to_owned(),
            timestamp: at(2024, 11, 20, 14, 0),
            outcome: Some("Lost to competitor".to_owned()),
        },
    ]
}

/// The seeded template library.
#[must_use]
pub fn email_templates() -> Vec<EmailTemplate> {
    vec![
        EmailTemplate {
            id: TemplateId::new("ET001"),
            name: "Welcome Email".to_owned(),
            subject: "Welcome to Our Platform - Getting Started Guide".to_owned(),
            content: "Dear {{name}},\n\nWelcome to our platform! We're excited to have you on board..."
                .to_owned(),
            category: "Onboarding".to_owned(),
            created_by: "Admin User".to_owned(),
            created_at: date(2024, 10, 1),
            last_used: date(2024, 12, 10),
            usage_count: 156,
        },
        EmailTemplate {
            id: TemplateId::new("ET002"),
            name: "Follow-up After Demo".to_owned(),
            subject: "Thank You for Your Time - Next Steps".to_owned(),
            content: "Hi {{name}},\n\nThank you for taking the time to see our demo yesterday..."
                .to_owned(),
            category: "Sales".to_owned(),
            created_by: "John Smith".to_owned(),
            created_at: date(2024, 9, 15),
            last_used: date(2024, 12, 9),
            usage_count: 89,
        },
        EmailTemplate {
            id: TemplateId::new("ET003"),
            name: "Proposal Send".to_owned(),
            subject: "Your Custom Proposal from {{company}}".to_owned(),
            content: "Dear {{name}},\n\nPlease find attached the proposal we discussed...".to_owned(),
            category: "Sales".to_owned(),
            created_by: "Emily Davis".to_owned(),
            created_at: date(2024, 8, 20),
            last_used: date(2024, 12, 8),
            usage_count: 67,
        },
        EmailTemplate {
            id: TemplateId::new("ET004"),
            name: "Re-engagement".to_owned(),
            subject: "We Miss You! Check Out What's New".to_owned(),
            content: "Hi {{name}},\n\nIt's been a while since we connected...".to_owned(),
            category: "Marketing".to_owned(),
            created_by: "Admin User".to_owned(),
            created_at: date(2024, 11, 1),
            last_used: date(2024, 12, 5),
            usage_count: 34,
        },
        EmailTemplate {
            id: TemplateId::new("ET005"),
            name: "Contract Renewal".to_owned(),
            subject: "Your Contract Renewal - Special Offer Inside".to_owned(),
            content: "Dear {{name}},\n\nYour contract is coming up for renewal...".to_owned(),
            category: "Account Management".to_owned(),
            created_by: "Sarah Wilson".to_owned(),
            created_at: date(2024, 7, 10),
            last_used: date(2024, 12, 1),
            usage_count: 45,
        },
    ]
}

/// Topline dashboard numbers.
#[must_use]
pub fn dashboard_metrics() -> DashboardMetrics {
    DashboardMetrics {
        total_leads: 248,
        new_leads_this_month: 45,
        active_opportunities: 32,
        total_revenue: Money::from_dollars(1_385_000),
        revenue_target: Money::from_dollars(2_000_000),
        conversion_rate: Decimal::new(245, 1),
        avg_deal_size: Money::from_dollars(82_500),
        tasks_completed: 156,
        tasks_pending: 28,
        activities_this_week: 89,
    }
}

/// Funnel chart rows.
#[must_use]
pub fn funnel() -> Vec<FunnelStage> {
    vec![
        FunnelStage {
            stage: "New Leads".to_owned(),
            count: 45,
            value: Money::from_dollars(850_000),
        },
        FunnelStage {
            stage: "Qualified".to_owned(),
            count: 32,
            value: Money::from_dollars(720_000),
        },
        FunnelStage {
            stage: "Proposal".to_owned(),
            count: 18,
            value: Money::from_dollars(540_000),
        },
        FunnelStage {
            stage: "Negotiation".to_owned(),
            count: 12,
            value: Money::from_dollars(420_000),
        },
        FunnelStage {
            stage: "Closed Won".to_owned(),
            count: 8,
            value: Money::from_dollars(350_000),
        },
    ]
}

/// Monthly performance trend rows.
#[must_use]
pub fn monthly_performance() -> Vec<MonthlyPerformance> {
    vec![
        MonthlyPerformance {
            month: "Jul".to_owned(),
            leads: 32,
            deals: 5,
            revenue: Money::from_dollars(125_000),
        },
        MonthlyPerformance {
            month: "Aug".to_owned(),
            leads: 38,
            deals: 7,
            revenue: Money::from_dollars(185_000),
        },
        MonthlyPerformance {
            month: "Sep".to_owned(),
            leads: 45,
            deals: 8,
            revenue: Money::from_dollars(210_000),
        },
        MonthlyPerformance {
            month: "Oct".to_owned(),
            leads: 42,
            deals: 10,
            revenue: Money::from_dollars(275_000),
        },
        MonthlyPerformance {
            month: "Nov".to_owned(),
            leads: 48,
            deals: 11,
            revenue: Money::from_dollars(295_000),
        },
        MonthlyPerformance {
            month: "Dec".to_owned(),
            leads: 52,
            deals: 12,
            revenue: Money::from_dollars(320_000),
        },
    ]
}

/// Lead source breakdown rows.
#[must_use]
pub fn lead_sources() -> Vec<LeadSourceShare> {
    vec![
        LeadSourceShare {
            source: "Website".to_owned(),
            count: 85,
            percentage: 34,
        },
        LeadSourceShare {
            source: "Referral".to_owned(),
            count: 62,
            percentage: 25,
        },
        LeadSourceShare {
            source: "LinkedIn".to_owned(),
            count: 45,
            percentage: 18,
        },
        LeadSourceShare {
            source: "Trade Show".to_owned(),
            count: 32,
            percentage: 13,
        },
        LeadSourceShare {
            source: "Cold Call".to_owned(),
            count: 24,
            percentage: 10,
        },
    ]
}

/// Team leaderboard rows.
#[must_use]
pub fn team_performance() -> Vec<TeamMemberStats> {
    vec![
        TeamMemberStats {
            name: "John Smith".to_owned(),
            deals: 12,
            revenue: Money::from_dollars(485_000),
            target: Money::from_dollars(500_000),
        },
        TeamMemberStats {
            name: "Emily Davis".to_owned(),
            deals: 9,
            revenue: Money::from_dollars(320_000),
            target: Money::from_dollars(400_000),
        },
        TeamMemberStats {
            name: "Sarah Wilson".to_owned(),
            deals: 15,
            revenue: Money::from_dollars(580_000),
            target: Money::from_dollars(600_000),
        },
    ]
}
