//! Compiled-in topic table. Entry order is display order.

use super::topic_registry::Topic;

/// Every topic offered by the app, in the order listing screens show them.
///
/// Ids must stay unique; nothing checks this at runtime.
pub static TOPICS: &[Topic] = &[
    Topic {
        id: "reactjs-hooks",
        name: "ReactJS Hooks",
        slug: "reactjs-hooks",
        icon: "logo-react",
        color: "#61DAFB",
        total_questions: 20,
        data_file: "reactjs/hooks.json",
    },
    Topic {
        id: "css-scss",
        name: "CSS/SCSS",
        slug: "css-scss",
        icon: "logo-css3",
        color: "#1572B6",
        total_questions: 17,
        data_file: "languages/css-scss.json",
    },
    Topic {
        id: "javascript",
        name: "JavaScript Core",
        slug: "javascript",
        icon: "logo-javascript",
        color: "#F7DF1E",
        total_questions: 26,
        data_file: "languages/javascript.json",
    },
    Topic {
        id: "typescript",
        name: "TypeScript",
        slug: "typescript",
        icon: "code-slash",
        color: "#3178C6",
        total_questions: 20,
        data_file: "languages/typescript.json",
    },
    Topic {
        id: "git",
        name: "Git Commands",
        slug: "git",
        icon: "git-branch",
        color: "#F05032",
        total_questions: 15,
        data_file: "tools/git.json",
    },
    Topic {
        id: "react-native",
        name: "React Native",
        slug: "react-native",
        icon: "phone-portrait-outline",
        color: "#61DAFB",
        total_questions: 20,
        data_file: "mobile/react-native.json",
    },
    Topic {
        id: "system-design",
        name: "System Design",
        slug: "system-design",
        icon: "server-outline",
        color: "#8b5cf6",
        total_questions: 20,
        data_file: "architecture/system-design.json",
    },
    Topic {
        id: "nodejs",
        name: "Node.js",
        slug: "nodejs",
        icon: "logo-nodejs",
        color: "#4ade80",
        total_questions: 20,
        data_file: "backend/nodejs.json",
    },
    Topic {
        id: "sql-databases",
        name: "SQL & Databases",
        slug: "sql-databases",
        icon: "file-tray-full-outline",
        color: "#f59e0b",
        total_questions: 20,
        data_file: "backend/sql.json",
    },
    Topic {
        id: "docker-devops",
        name: "Docker & DevOps",
        slug: "docker-devops",
        icon: "logo-docker",
        color: "#3b82f6",
        total_questions: 20,
        data_file: "devops/docker.json",
    },
];
