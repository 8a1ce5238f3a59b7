//! Bundled explorer tree.
//!
//! Three desktop roots: the computer (with the resume drive), the user
//! profile, and the recycle bin. File bodies are Markdown.

use super::store::ItemStore;
use crate::config::RECYCLE_BIN_ID;
use crate::models::{Item, ItemIcon};

const SUMMARY: &str = "\
## Professional Summary

Dynamic and results-oriented Full Stack Engineer with 5+ years of experience in developing \
and implementing innovative software solutions. Proficient in React, Node.js, Python, and \
cloud technologies. Proven ability to lead projects and collaborate effectively in \
fast-paced environments.
";

const JOB_TECHCORP: &str = "\
### Senior Software Engineer

**Tech Solutions Inc.** | Jan 2020 - Present

- Led the development of a new client-facing analytics dashboard using React and D3.js, \
resulting in a 20% increase in user engagement.
- Architected and implemented microservices using Node.js and Docker, improving system \
scalability and reducing server costs by 15%.
- Mentored junior engineers and conducted code reviews to ensure high-quality software delivery.
";

const JOB_INNOVATE: &str = "\
### Software Engineer

**Innovate LLC** | Jun 2017 - Dec 2019

- Developed and maintained features for a SaaS product using Python (Django) and PostgreSQL.
- Collaborated with cross-functional teams to define project requirements and deliver \
solutions on time.
- Contributed to the migration of legacy systems to a modern cloud infrastructure (AWS).
";

const DEGREE: &str = "\
### B.S. in Computer Science

**State University** | Graduated: May 2017

Relevant Coursework: Data Structures, Algorithms, Database Management, Software Engineering.
";

const CLOUD_CERT: &str = "\
### AWS Certified Cloud Practitioner

**Amazon Web Services** | Issued: Mar 2021
";

const SKILLS: &str = "\
## Technical Skills

#### Programming Languages:
JavaScript (ES6+), TypeScript, Python, Java, C#

#### Frameworks & Libraries:
React, Node.js, Express, Django, Spring Boot, .NET

#### Databases:
PostgreSQL, MySQL, MongoDB, SQL Server

#### Tools & Technologies:
Git, Docker, Kubernetes, AWS, Azure, Jenkins, Jira
";

const PORTFOLIO_PROJECT: &str = "\
### Personal Portfolio Website (This App!)

**Rust, Leptos, WebAssembly**

Developed an interactive resume application styled as a desktop file explorer. Features \
include dynamic content rendering, custom context menus, and a themeable UI.
";

const CHATBOT_PROJECT: &str = "\
### AI Customer Service Chatbot

**Python, NLTK, TensorFlow**

Built a machine learning-powered chatbot to handle customer inquiries, reducing response \
times by 30%. Integrated with existing CRM systems.
";

const CONTACT_CARD: &str = "\
## Contact Card

- Name: Jules Doe
- Email: jules.doe@example.com
- Phone: (555) 123-4567
- LinkedIn: [linkedin.com/in/julesdoe](https://linkedin.com/in/julesdoe)
- GitHub: [github.com/julesdoe](https://github.com/julesdoe)

*This \"URL\" file contains my contact details. In a real OS, it might open an email client \
or a webpage.*
";

const CONTACT_TXT: &str = "\
### Contact Information

Email: jules.doe@example.com
Phone: (555) 123-4567
LinkedIn: linkedin.com/in/julesdoe
GitHub: github.com/julesdoe
";

const ADDRESS_TXT: &str = "\
### Address

123 Main Street
Anytown, ST 12345
";

const COVER_LETTER: &str = "\
## Cover Letter

Dear Hiring Manager, ... I am writing to express my keen interest in the Software Engineer \
position...
";

const REFERENCES: &str = "\
## References

Available upon request.
";

const SHORTCUT: &str = "Shortcut to \"My Resume\" section or `C:/Windows Resume/My Resume.exe`";

/// Items of the bundled resume tree, in display order.
pub fn resume_items() -> Vec<Item> {
    use ItemIcon::*;

    vec![
        // Desktop roots
        Item::folder("myComputer", "My Computer", None, Computer, "System Folder"),
        Item::folder("userProfile", "Jules Doe (User)", None, UserProfile, "User Profile Folder"),
        Item::folder(RECYCLE_BIN_ID, "Recycle Bin", None, RecycleBin, "Contains deleted items"),
        // My Computer
        Item::folder("resumeDriveC", "Resume (C:)", Some("myComputer"), Drive, "Local Disk"),
        // User profile
        Item::folder("desktop", "Desktop", Some("userProfile"), Folder, "File folder"),
        Item::file("resumeShortcut", "View Resume.lnk", "desktop", Shortcut, "Shortcut", SHORTCUT),
        Item::folder("documents", "Documents", Some("userProfile"), Folder, "File folder"),
        Item::file(
            "coverLetterDoc",
            "Cover Letter.docx",
            "documents",
            WordDocument,
            "Microsoft Word Document",
            COVER_LETTER,
        ),
        Item::file(
            "referencesDoc",
            "References.docx",
            "documents",
            WordDocument,
            "Microsoft Word Document",
            REFERENCES,
        ),
        Item::folder("downloads", "Downloads", Some("userProfile"), Folder, "File folder"),
        // Resume (C:)
        Item::folder("programFiles", "Program Files", Some("resumeDriveC"), Folder, "File folder"),
        Item::folder(
            "windowsResume",
            "Windows Resume",
            Some("resumeDriveC"),
            Folder,
            "File folder - Core Resume Data",
        ),
        Item::folder("personalInfo", "Personal Info", Some("resumeDriveC"), SecureFolder, "File folder"),
        Item::file(
            "contactInfoTxt",
            "Contact.txt",
            "personalInfo",
            Text,
            "Text Document",
            CONTACT_TXT,
        ),
        Item::file(
            "addressInfoTxt",
            "Address.txt",
            "personalInfo",
            Text,
            "Text Document",
            ADDRESS_TXT,
        ),
        // Windows Resume
        Item::file("summary", "Summary.exe", "windowsResume", Executable, "Application", SUMMARY),
        Item::folder("experience", "Work Experience", Some("windowsResume"), Folder, "File folder"),
        Item::file(
            "job1",
            "SeniorDev_TechCorp.dat",
            "experience",
            Data,
            "Configuration File",
            JOB_TECHCORP,
        ),
        Item::file(
            "job2",
            "Dev_InnovateLLC.dat",
            "experience",
            Data,
            "Configuration File",
            JOB_INNOVATE,
        ),
        Item::folder("education", "Education History", Some("windowsResume"), Folder, "File folder"),
        Item::file(
            "degree1",
            "BS_ComputerScience.edu",
            "education",
            Certificate,
            "Educational Record",
            DEGREE,
        ),
        Item::file(
            "cert1",
            "CloudPractitioner.cert",
            "education",
            Certificate,
            "Certificate File",
            CLOUD_CERT,
        ),
        Item::file(
            "skills",
            "Skills.cfg",
            "windowsResume",
            Settings,
            "Configuration Settings",
            SKILLS,
        ),
        Item::folder("projects", "Projects Showcase", Some("windowsResume"), Folder, "File folder"),
        Item::file(
            "project1",
            "PortfolioSite_README.txt",
            "projects",
            Text,
            "Text Document",
            PORTFOLIO_PROJECT,
        ),
        Item::file(
            "project2",
            "AIChatbot_README.txt",
            "projects",
            Text,
            "Text Document",
            CHATBOT_PROJECT,
        ),
        Item::file(
            "contact",
            "ContactMe.url",
            "windowsResume",
            Url,
            "Internet Shortcut",
            CONTACT_CARD,
        ),
    ]
}

impl ItemStore {
    /// The bundled resume tree.
    pub fn resume() -> Self {
        Self::new(resume_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_tree_is_valid() {
        let store = ItemStore::resume();
        assert_eq!(store.validate(), Ok(()));
    }

    #[test]
    fn test_resume_roots() {
        let store = ItemStore::resume();
        let roots: Vec<_> = store.roots().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(roots, vec!["My Computer", "Jules Doe (User)", "Recycle Bin"]);
    }

    #[test]
    fn test_summary_path() {
        let store = ItemStore::resume();
        let names: Vec<_> = store
            .path_to("summary")
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["My Computer", "Resume (C:)", "Windows Resume", "Summary.exe"]
        );
    }

    #[test]
    fn test_windows_resume_sections_in_order() {
        let store = ItemStore::resume();
        let children: Vec<_> = store
            .children_of("windowsResume")
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(
            children,
            vec!["summary", "experience", "education", "skills", "projects", "contact"]
        );
    }

    #[test]
    fn test_only_files_have_content() {
        let store = ItemStore::resume();
        for item in store.items() {
            assert_eq!(item.content().is_some(), !item.is_folder(), "{}", item.id);
        }
    }

    #[test]
    fn test_single_shortcut() {
        let store = ItemStore::resume();
        let shortcuts: Vec<_> = store
            .items()
            .iter()
            .filter(|i| i.is_shortcut())
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(shortcuts, vec!["resumeShortcut"]);
    }

    #[test]
    fn test_protected_ids_are_roots_or_drives() {
        let store = ItemStore::resume();
        for id in crate::config::PROTECTED_ITEM_IDS {
            let item = store.item_by_id(id).expect("protected item should exist");
            assert!(item.is_folder());
        }
    }

    #[test]
    fn test_recycle_bin_starts_empty() {
        let store = ItemStore::resume();
        assert!(store.children_of(RECYCLE_BIN_ID).is_empty());
        assert_eq!(store.descendants_of("myComputer").map(|d| d.len()), Ok(18));
    }
}
