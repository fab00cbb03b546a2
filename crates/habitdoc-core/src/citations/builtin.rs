//! Built-in reference list and phrase rules for the Habit Tracker report

/// `(topic, id, citation text)`
pub const REFERENCES: &[(&str, u32, &str)] = &[
    // Backend
    (
        "spring_boot",
        1,
        "Spring Boot Reference Documentation. VMware, Inc., 2024. URL: https://docs.spring.io/spring-boot/docs/current/reference/html/ (дата звернення: 11.12.2024).",
    ),
    (
        "spring_security",
        2,
        "Spring Security Reference. VMware, Inc., 2024. URL: https://docs.spring.io/spring-security/reference/ (дата звернення: 11.12.2024).",
    ),
    (
        "java",
        3,
        "The Java™ Tutorials. Oracle Corporation, 2024. URL: https://docs.oracle.com/javase/tutorial/ (дата звернення: 11.12.2024).",
    ),
    (
        "jwt",
        4,
        "Jones M., Bradley J., Sakimura N. JSON Web Token (JWT). RFC 7519, Internet Engineering Task Force, 2015. URL: https://datatracker.ietf.org/doc/html/rfc7519 (дата звернення: 11.12.2024).",
    ),
    (
        "mongodb",
        5,
        "MongoDB Documentation. MongoDB, Inc., 2024. URL: https://www.mongodb.com/docs/ (дата звернення: 11.12.2024).",
    ),
    (
        "maven",
        6,
        "Maven Documentation. Apache Software Foundation, 2024. URL: https://maven.apache.org/guides/ (дата звернення: 11.12.2024).",
    ),
    (
        "lombok",
        7,
        "Project Lombok Documentation. The Project Lombok Authors, 2024. URL: https://projectlombok.org/features/ (дата звернення: 11.12.2024).",
    ),
    // Frontend
    (
        "react",
        8,
        "React Documentation. Meta Platforms, Inc., 2024. URL: https://react.dev/learn (дата звернення: 11.12.2024).",
    ),
    (
        "vite",
        9,
        "Vite Documentation. Evan You and Vite Contributors, 2024. URL: https://vitejs.dev/guide/ (дата звернення: 11.12.2024).",
    ),
    (
        "react_router",
        10,
        "React Router Documentation. Remix Software Inc., 2024. URL: https://reactrouter.com/en/main (дата звернення: 11.12.2024).",
    ),
    (
        "zustand",
        11,
        "Zustand Documentation. Poimandres, 2024. URL: https://docs.pmnd.rs/zustand/getting-started/introduction (дата звернення: 11.12.2024).",
    ),
    (
        "axios",
        12,
        "Axios Documentation. Axios Contributors, 2024. URL: https://axios-http.com/docs/intro (дата звернення: 11.12.2024).",
    ),
    (
        "tailwind",
        13,
        "Tailwind CSS Documentation. Tailwind Labs Inc., 2024. URL: https://tailwindcss.com/docs (дата звернення: 11.12.2024).",
    ),
    // Security and protocols
    (
        "bcrypt",
        14,
        "Provos N., Mazières D. A Future-Adaptable Password Scheme. Proceedings of the USENIX Annual Technical Conference, 1999. URL: https://www.usenix.org/legacy/events/usenix99/provos/provos.pdf (дата звернення: 11.12.2024).",
    ),
    (
        "rest_api",
        15,
        "Fielding R.T. Architectural Styles and the Design of Network-based Software Architectures. Doctoral dissertation, University of California, Irvine, 2000. URL: https://www.ics.uci.edu/~fielding/pubs/dissertation/top.htm (дата звернення: 11.12.2024).",
    ),
    // Architecture patterns
    (
        "layered_architecture",
        16,
        "Buschmann F., Meunier R., Rohnert H., Sommerlad P., Stal M. Pattern-Oriented Software Architecture, Volume 1: A System of Patterns. John Wiley & Sons, 1996. 476 p.",
    ),
    (
        "dependency_injection",
        17,
        "Fowler M. Inversion of Control Containers and the Dependency Injection pattern, 2004. URL: https://martinfowler.com/articles/injection.html (дата звернення: 11.12.2024).",
    ),
    (
        "repository_pattern",
        18,
        "Fowler M. Patterns of Enterprise Application Architecture. Addison-Wesley Professional, 2002. 560 p.",
    ),
    (
        "builder_pattern",
        19,
        "Gamma E., Helm R., Johnson R., Vlissides J. Design Patterns: Elements of Reusable Object-Oriented Software. Addison-Wesley Professional, 1994. 416 p.",
    ),
    (
        "component_architecture",
        20,
        "Abramov D., Clark A. Thinking in React. React Documentation, Meta Platforms, Inc., 2024. URL: https://react.dev/learn/thinking-in-react (дата звернення: 11.12.2024).",
    ),
];

/// Technology names and the topics they cite
pub const TECHNOLOGY_RULES: &[(&str, &[&str])] = &[
    ("Spring Boot 3.2.0", &["spring_boot"]),
    ("Java 17", &["java"]),
    ("Spring Security з JWT", &["spring_security", "jwt"]),
    ("MongoDB", &["mongodb"]),
    ("Maven", &["maven"]),
    ("Lombok", &["lombok"]),
    ("React 18", &["react"]),
    ("Vite", &["vite"]),
    ("React Router v6", &["react_router"]),
    ("Zustand", &["zustand"]),
    ("Axios", &["axios"]),
    ("Tailwind CSS", &["tailwind"]),
    ("BCrypt", &["bcrypt"]),
    ("REST API", &["rest_api"]),
    ("RESTful API", &["rest_api"]),
];

/// Architecture pattern names and the topics they cite
pub const PATTERN_RULES: &[(&str, &[&str])] = &[
    ("Багатошарова архітектура", &["layered_architecture"]),
    ("Layered Architecture", &["layered_architecture"]),
    ("Dependency Injection", &["dependency_injection"]),
    ("Repository Pattern", &["repository_pattern"]),
    ("Builder Pattern", &["builder_pattern"]),
    ("Component-Based Architecture", &["component_architecture"]),
];
