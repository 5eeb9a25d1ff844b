//! Skills catalogue: what each job family learns, grouped by AI area

use crate::domain::{AiArea, RoleSkills, Skill, SkillRole};

use AiArea::{DrivenSdlc, DrivenSoftwareSolution, Fundamentals};

const fn skill(name: &'static str, area: AiArea) -> Skill {
    Skill { name, area }
}

const BUSINESS_ANALYST_SKILLS: &[Skill] = &[
    skill("Prompt Engineering", Fundamentals),
    skill("LLM", Fundamentals),
    skill("API", Fundamentals),
    skill("LangChain for GenAI/LLM Apps", Fundamentals),
    skill("RAG", Fundamentals),
    skill("Vector DB", Fundamentals),
    skill("AI Ethics", Fundamentals),
    skill("Specialization", Fundamentals),
    skill("MCP", Fundamentals),
    skill("SDK", Fundamentals),
    skill("AI Chat Bot", Fundamentals),
    skill("Plugin", Fundamentals),

    skill("System Prompts", DrivenSdlc),
    skill("AI Assistant Creation/Integration", DrivenSdlc),
    skill("AI Workflow Agent to Agent", DrivenSdlc),
    skill("Performance measurements for dif roles", DrivenSdlc),

    skill("AI Hypothesis Testing", DrivenSoftwareSolution),
    skill("AI Vibecoding for POC", DrivenSoftwareSolution),
    skill("AI solution applicability", DrivenSoftwareSolution),
    skill("AI Model Capability Assessment", DrivenSoftwareSolution),
    skill("AI Data Assessment & Preparation", DrivenSoftwareSolution),
    skill("AI Solution of System Design", DrivenSoftwareSolution),
    skill("AI Development & Deployment", DrivenSoftwareSolution),
    skill("AI Solution Evaluation & Validation", DrivenSoftwareSolution),
    skill("AI Monitoring & Improvements", DrivenSoftwareSolution),
    skill("AI User Training & Change Management", DrivenSoftwareSolution),
];

const DEVELOPER_SKILLS: &[Skill] = &[
    skill("Prompt Engineering", Fundamentals),
    skill("LLM Integration", Fundamentals),
    skill("API Development", Fundamentals),
    skill("LangChain Implementation", Fundamentals),
    skill("RAG Architecture", Fundamentals),
    skill("Vector DB Setup", Fundamentals),
    skill("AI Ethics in Code", Fundamentals),
    skill("Model Specialization", Fundamentals),
    skill("MCP Integration", Fundamentals),
    skill("SDK Usage", Fundamentals),
    skill("Chat Bot Development", Fundamentals),
    skill("Plugin Development", Fundamentals),

    skill("System Prompt Design", DrivenSdlc),
    skill("AI Assistant Development", DrivenSdlc),
    skill("Agent Workflow Implementation", DrivenSdlc),
    skill("Code Performance Metrics", DrivenSdlc),

    skill("AI Feature Testing", DrivenSoftwareSolution),
    skill("POC Development", DrivenSoftwareSolution),
    skill("Solution Architecture", DrivenSoftwareSolution),
    skill("Model Evaluation", DrivenSoftwareSolution),
    skill("Data Pipeline Setup", DrivenSoftwareSolution),
    skill("System Design with AI", DrivenSoftwareSolution),
    skill("AI Feature Deployment", DrivenSoftwareSolution),
    skill("Solution Testing", DrivenSoftwareSolution),
    skill("Performance Monitoring", DrivenSoftwareSolution),
    skill("Technical Documentation", DrivenSoftwareSolution),
];

const ARCHITECTS_SKILLS: &[Skill] = &[
    skill("AI Architecture Patterns", Fundamentals),
    skill("LLM Architecture", Fundamentals),
    skill("API Architecture", Fundamentals),
    skill("LangChain Architecture", Fundamentals),
    skill("RAG System Design", Fundamentals),
    skill("Vector DB Architecture", Fundamentals),
    skill("Ethical AI Design", Fundamentals),
    skill("Model Selection", Fundamentals),
    skill("MCP Architecture", Fundamentals),
    skill("SDK Architecture", Fundamentals),
    skill("Chat Bot Architecture", Fundamentals),
    skill("Plugin Architecture", Fundamentals),

    skill("System Architecture Design", DrivenSdlc),
    skill("AI System Integration", DrivenSdlc),
    skill("Multi-Agent Architecture", DrivenSdlc),
    skill("Architecture Performance", DrivenSdlc),

    skill("Solution Architecture", DrivenSoftwareSolution),
    skill("POC Architecture", DrivenSoftwareSolution),
    skill("Scalability Design", DrivenSoftwareSolution),
    skill("Model Architecture", DrivenSoftwareSolution),
    skill("Data Architecture", DrivenSoftwareSolution),
    skill("System Architecture", DrivenSoftwareSolution),
    skill("Deployment Architecture", DrivenSoftwareSolution),
    skill("Architecture Validation", DrivenSoftwareSolution),
    skill("Monitoring Architecture", DrivenSoftwareSolution),
    skill("Change Management Design", DrivenSoftwareSolution),
];

const DESIGNERS_SKILLS: &[Skill] = &[
    skill("AI UX Design", Fundamentals),
    skill("LLM UX Patterns", Fundamentals),
    skill("API UX Design", Fundamentals),
    skill("GenAI UX Design", Fundamentals),
    skill("RAG UX Design", Fundamentals),
    skill("Vector DB UX", Fundamentals),
    skill("Ethical Design", Fundamentals),
    skill("AI Specialization UX", Fundamentals),
    skill("MCP UX Design", Fundamentals),
    skill("SDK UX Design", Fundamentals),
    skill("Chat Bot UX", Fundamentals),
    skill("Plugin UX Design", Fundamentals),

    skill("Design System Prompts", DrivenSdlc),
    skill("AI Assistant UX", DrivenSdlc),
    skill("Workflow UX Design", DrivenSdlc),
    skill("Design Performance", DrivenSdlc),

    skill("AI Feature Design", DrivenSoftwareSolution),
    skill("POC Design", DrivenSoftwareSolution),
    skill("Solution UX Design", DrivenSoftwareSolution),
    skill("Model UX Design", DrivenSoftwareSolution),
    skill("Data Visualization", DrivenSoftwareSolution),
    skill("System Design UX", DrivenSoftwareSolution),
    skill("Deployment UX", DrivenSoftwareSolution),
    skill("Design Validation", DrivenSoftwareSolution),
    skill("UX Monitoring", DrivenSoftwareSolution),
    skill("User Training Design", DrivenSoftwareSolution),
];

const DEVOPS_SKILLS: &[Skill] = &[
    skill("Prompt CI/CD", Fundamentals),
    skill("LLM Deployment", Fundamentals),
    skill("API Infrastructure", Fundamentals),
    skill("LangChain DevOps", Fundamentals),
    skill("RAG Infrastructure", Fundamentals),
    skill("Vector DB Ops", Fundamentals),
    skill("AI Security", Fundamentals),
    skill("Model Ops", Fundamentals),
    skill("MCP Infrastructure", Fundamentals),
    skill("SDK Deployment", Fundamentals),
    skill("Chat Bot Ops", Fundamentals),
    skill("Plugin Deployment", Fundamentals),

    skill("System Automation", DrivenSdlc),
    skill("AI Assistant Ops", DrivenSdlc),
    skill("Workflow Automation", DrivenSdlc),
    skill("Infrastructure Metrics", DrivenSdlc),

    skill("AI Testing Automation", DrivenSoftwareSolution),
    skill("POC Deployment", DrivenSoftwareSolution),
    skill("Solution Infrastructure", DrivenSoftwareSolution),
    skill("Model Deployment", DrivenSoftwareSolution),
    skill("Data Pipeline Ops", DrivenSoftwareSolution),
    skill("Infrastructure Design", DrivenSoftwareSolution),
    skill("CI/CD Pipeline", DrivenSoftwareSolution),
    skill("Infrastructure Validation", DrivenSoftwareSolution),
    skill("System Monitoring", DrivenSoftwareSolution),
    skill("Change Management Ops", DrivenSoftwareSolution),
];

const PRODUCT_MANAGERS_SKILLS: &[Skill] = &[
    skill("AI Product Strategy", Fundamentals),
    skill("LLM Product Planning", Fundamentals),
    skill("API Product Management", Fundamentals),
    skill("GenAI Product Roadmap", Fundamentals),
    skill("RAG Product Strategy", Fundamentals),
    skill("Vector DB Product", Fundamentals),
    skill("Ethical Product Design", Fundamentals),
    skill("Product Specialization", Fundamentals),
    skill("MCP Product Strategy", Fundamentals),
    skill("SDK Product Management", Fundamentals),
    skill("Chat Bot Product", Fundamentals),
    skill("Plugin Product Strategy", Fundamentals),

    skill("Product Requirements", DrivenSdlc),
    skill("AI Feature Planning", DrivenSdlc),
    skill("Workflow Product Design", DrivenSdlc),
    skill("Product Metrics", DrivenSdlc),

    skill("Product Testing Strategy", DrivenSoftwareSolution),
    skill("POC Product Planning", DrivenSoftwareSolution),
    skill("Solution Product Strategy", DrivenSoftwareSolution),
    skill("Model Product Planning", DrivenSoftwareSolution),
    skill("Data Product Strategy", DrivenSoftwareSolution),
    skill("Product System Design", DrivenSoftwareSolution),
    skill("Product Launch", DrivenSoftwareSolution),
    skill("Product Validation", DrivenSoftwareSolution),
    skill("Product Analytics", DrivenSoftwareSolution),
    skill("Product Change Management", DrivenSoftwareSolution),
];

const PROJECT_DELIVERY_MANAGERS_SKILLS: &[Skill] = &[
    skill("AI Project Planning", Fundamentals),
    skill("LLM Project Management", Fundamentals),
    skill("API Project Delivery", Fundamentals),
    skill("GenAI Project Management", Fundamentals),
    skill("RAG Project Planning", Fundamentals),
    skill("Vector DB Projects", Fundamentals),
    skill("Ethical Project Management", Fundamentals),
    skill("Project Specialization", Fundamentals),
    skill("MCP Project Management", Fundamentals),
    skill("SDK Project Delivery", Fundamentals),
    skill("Chat Bot Projects", Fundamentals),
    skill("Plugin Project Management", Fundamentals),

    skill("Project Requirements", DrivenSdlc),
    skill("AI Project Delivery", DrivenSdlc),
    skill("Workflow Project Management", DrivenSdlc),
    skill("Project Metrics", DrivenSdlc),

    skill("Project Testing", DrivenSoftwareSolution),
    skill("POC Project Management", DrivenSoftwareSolution),
    skill("Solution Delivery", DrivenSoftwareSolution),
    skill("Model Project Planning", DrivenSoftwareSolution),
    skill("Data Project Management", DrivenSoftwareSolution),
    skill("Project System Design", DrivenSoftwareSolution),
    skill("Project Deployment", DrivenSoftwareSolution),
    skill("Project Validation", DrivenSoftwareSolution),
    skill("Project Monitoring", DrivenSoftwareSolution),
    skill("Change Management", DrivenSoftwareSolution),
];

const QA_TEST_AUTOMATION_SKILLS: &[Skill] = &[
    skill("AI Testing Fundamentals", Fundamentals),
    skill("LLM Testing", Fundamentals),
    skill("API Testing", Fundamentals),
    skill("GenAI Testing", Fundamentals),
    skill("RAG Testing", Fundamentals),
    skill("Vector DB Testing", Fundamentals),
    skill("Ethical Testing", Fundamentals),
    skill("Model Testing", Fundamentals),
    skill("MCP Testing", Fundamentals),
    skill("SDK Testing", Fundamentals),
    skill("Chat Bot Testing", Fundamentals),
    skill("Plugin Testing", Fundamentals),

    skill("System Test Design", DrivenSdlc),
    skill("AI Assistant Testing", DrivenSdlc),
    skill("Workflow Testing", DrivenSdlc),
    skill("Test Performance", DrivenSdlc),

    skill("AI Test Strategy", DrivenSoftwareSolution),
    skill("POC Testing", DrivenSoftwareSolution),
    skill("Solution Testing", DrivenSoftwareSolution),
    skill("Model Validation", DrivenSoftwareSolution),
    skill("Data Testing", DrivenSoftwareSolution),
    skill("System Test Design", DrivenSoftwareSolution),
    skill("Deployment Testing", DrivenSoftwareSolution),
    skill("Solution Validation", DrivenSoftwareSolution),
    skill("Test Monitoring", DrivenSoftwareSolution),
    skill("Test Automation", DrivenSoftwareSolution),
];

const OTHER_ROLES_SKILLS: &[Skill] = &[
    skill("AI Basics", Fundamentals),
    skill("LLM Understanding", Fundamentals),
    skill("API Basics", Fundamentals),
    skill("GenAI Overview", Fundamentals),
    skill("RAG Basics", Fundamentals),
    skill("Vector DB Basics", Fundamentals),
    skill("AI Ethics Overview", Fundamentals),
    skill("AI Specialization", Fundamentals),
    skill("MCP Basics", Fundamentals),
    skill("SDK Basics", Fundamentals),
    skill("Chat Bot Basics", Fundamentals),
    skill("Plugin Basics", Fundamentals),

    skill("System Understanding", DrivenSdlc),
    skill("AI Assistant Basics", DrivenSdlc),
    skill("Workflow Basics", DrivenSdlc),
    skill("Performance Basics", DrivenSdlc),

    skill("AI Solution Basics", DrivenSoftwareSolution),
    skill("POC Understanding", DrivenSoftwareSolution),
    skill("Solution Overview", DrivenSoftwareSolution),
    skill("Model Basics", DrivenSoftwareSolution),
    skill("Data Basics", DrivenSoftwareSolution),
    skill("System Design Basics", DrivenSoftwareSolution),
    skill("Development Basics", DrivenSoftwareSolution),
    skill("Validation Basics", DrivenSoftwareSolution),
    skill("Monitoring Basics", DrivenSoftwareSolution),
    skill("Change Management Basics", DrivenSoftwareSolution),
];

static ROLE_SKILLS: [RoleSkills; 9] = [
    RoleSkills { role: SkillRole::BusinessAnalyst, skills: BUSINESS_ANALYST_SKILLS },
    RoleSkills { role: SkillRole::Developer, skills: DEVELOPER_SKILLS },
    RoleSkills { role: SkillRole::Architects, skills: ARCHITECTS_SKILLS },
    RoleSkills { role: SkillRole::Designers, skills: DESIGNERS_SKILLS },
    RoleSkills { role: SkillRole::DevOps, skills: DEVOPS_SKILLS },
    RoleSkills { role: SkillRole::ProductManagers, skills: PRODUCT_MANAGERS_SKILLS },
    RoleSkills { role: SkillRole::ProjectDeliveryManagers, skills: PROJECT_DELIVERY_MANAGERS_SKILLS },
    RoleSkills { role: SkillRole::QaTestAutomation, skills: QA_TEST_AUTOMATION_SKILLS },
    RoleSkills { role: SkillRole::OtherRoles, skills: OTHER_ROLES_SKILLS },
];

/// Every job family with its skills, in catalogue order.
pub fn role_skills() -> &'static [RoleSkills] {
    &ROLE_SKILLS
}

/// Skills of one job family.
pub fn skills_for(role: SkillRole) -> &'static RoleSkills {
    // ROLE_SKILLS is laid out in `SkillRole` declaration order.
    &ROLE_SKILLS[role as usize]
}
