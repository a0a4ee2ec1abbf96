//! Profile — everything folio knows about its owner.
//!
//! Projects are listed once here; the `open N` commands, the `projects`
//! command text and the projects section are all derived from `PROJECTS`.

pub struct Project {
    pub title: &'static str,
    /// Short name used in "Opening ..." status lines.
    pub label: &'static str,
    pub url: &'static str,
    pub summary: &'static str,
    pub categories: &'static [Category],
}

/// Tags the projects section can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Aws,
    DevOps,
    Python,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Aws, Category::DevOps, Category::Python];

    pub fn name(self) -> &'static str {
        match self {
            Category::Aws => "AWS",
            Category::DevOps => "DevOps",
            Category::Python => "Python",
        }
    }
}

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub experience: &'static str,
    pub passion: &'static str,
    pub status: &'static str,
    pub email: &'static str,
    pub mailto: &'static str,
    pub phone: &'static str,
    pub linkedin_url: &'static str,
    pub github_user: &'static str,
    pub github_url: &'static str,
    pub location: &'static str,
    pub skills: &'static [(&'static str, &'static str)],
    pub projects: &'static [Project],
    pub achievements: &'static [&'static str],
    pub resume_file: &'static str,
    pub resume: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "DevTest",
        label: "DevTest",
        url: "https://github.com/danielikesh/DevTest",
        summary: "CI/CD playground for build and test pipelines",
        categories: &[Category::DevOps],
    },
    Project {
        title: "Face Recognition Attendance System",
        label: "Face Recognition",
        url: "https://github.com/danielikesh/Face-Recognition-Attendance-System",
        summary: "Camera-based attendance tracking with Python",
        categories: &[Category::Python],
    },
    Project {
        title: "Personal Expense Tracker",
        label: "Expense Tracker",
        url: "https://github.com/danielikesh/Personal-expense-Tracker",
        summary: "Track and categorize day-to-day spending",
        categories: &[Category::Python],
    },
    Project {
        title: "DevOps Web Hosting",
        label: "DevOps Hosting",
        url: "https://github.com/danielikesh/danielikesh-My_first_devops_Web_hosting",
        summary: "Static site hosted on AWS with an automated deploy",
        categories: &[Category::Aws, Category::DevOps],
    },
];

pub static PROFILE: Profile = Profile {
    name: "Likesh Barve",
    role: "AWS & DevOps Engineer",
    experience: "Fresher with 6 AWS Certifications",
    passion: "Cloud Infrastructure & Automation",
    status: "Available for opportunities",
    email: "likeshbarve08@gmail.com",
    mailto: "mailto:likeshbarve08@gmail.com",
    phone: "9763879173",
    linkedin_url: "https://www.linkedin.com/in/likesh-barve-8b8723269/",
    github_user: "danielikesh",
    github_url: "https://github.com/danielikesh",
    location: "Pune, Maharashtra, India",
    skills: &[
        ("Cloud", "AWS (EC2, S3, Lambda, RDS, VPC, IAM)"),
        ("DevOps", "Docker, CI/CD, Git, Jenkins"),
        ("Languages", "Python, Shell"),
        ("OS", "Linux"),
        ("Tools", "Terraform, Ansible, CloudWatch"),
    ],
    projects: PROJECTS,
    achievements: &[
        "AWS Cloud Practitioner Essentials",
        "AWS Solutions Architect",
        "AWS DevOps Navigate",
        "Associate Systems Engineer at Braves Technologies",
        "AWS Cloud Intern at F13 Technologies",
    ],
    resume_file: "Likesh_Barve_Resume.txt",
    resume: RESUME,
};

const RESUME: &str = "Likesh Barve
AWS & DevOps Engineer
Email: likeshbarve08@gmail.com
Phone: 9763879173

SUMMARY
AWS-certified fresher with 6 certifications and hands-on experience in cloud infrastructure and DevOps automation.

EXPERIENCE
- Associate Systems Engineer at Braves Technologies
- AWS Cloud Intern at F13 Technologies

SKILLS
- AWS: EC2, S3, Lambda, RDS, VPC, IAM, CloudWatch
- DevOps: Docker, Git, CI/CD, Jenkins
- Programming: Python, Shell
- OS: Linux

CERTIFICATIONS
- AWS Cloud Practitioner Essentials
- AWS Solutions Architect
- AWS DevOps Navigate";

/// Phrases cycled by the home-section typing banner.
pub const BANNER_PHRASES: &[&str] = &[
    "aws ec2 describe-instances",
    "kubectl get pods --all-namespaces",
    "docker-compose up -d",
    "terraform apply --auto-approve",
    "git push origin main",
    "ansible-playbook deploy.yml",
    "python automation.py",
    "cloud formation deploy",
    "jenkins build now",
];

pub const JOKES: &[&str] = &[
    "Why do programmers prefer dark mode? Because light attracts bugs!",
    "Why did the developer go broke? Because he used up all his cache!",
    "Why do Java developers wear glasses? Because they can't C#!",
    "What's a programmer's favorite hangout place? Foo Bar!",
    "Why did the DBA leave his wife? She had one-to-many relationships!",
];

/// Shown in the stats section; the live GitHub numbers are not fetched.
pub const GITHUB_FALLBACK_STATS: &[(&str, &str)] =
    &[("Repositories", "10+"), ("Stars", "50+"), ("Commits", "500+")];

impl Profile {
    /// 1-based lookup, matching the numbers shown by `projects`.
    pub fn project(&self, number: usize) -> Option<&Project> {
        number.checked_sub(1).and_then(|i| self.projects.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_are_numbered_from_one() {
        assert!(PROFILE.project(0).is_none());
        assert_eq!(PROFILE.project(1).map(|p| p.title), Some("DevTest"));
        assert_eq!(
            PROFILE.project(2).map(|p| p.url),
            Some("https://github.com/danielikesh/Face-Recognition-Attendance-System")
        );
        assert!(PROFILE.project(5).is_none());
    }
}
