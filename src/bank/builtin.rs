use super::Role;

type Group = [(&'static str, &'static [&'static str]); 3];

pub(super) fn groups(role: Role) -> &'static [Group] {
    match role {
        Role::FrontendDeveloper => &FRONTEND_DEVELOPER,
        Role::BackendDeveloper => &BACKEND_DEVELOPER,
        Role::SoftwareEngineer => &SOFTWARE_ENGINEER,
        Role::FullStackEngineer => &FULL_STACK_ENGINEER,
        Role::DataScience => &DATA_SCIENCE,
        Role::DataAnalyst => &DATA_ANALYST,
    }
}

const FRONTEND_DEVELOPER: [Group; 3] = [
    [
        (
            "Can you explain how the Virtual DOM works in React and why it's efficient?",
            &["virtual dom", "reconciliation", "diffing", "react"],
        ),
        (
            "How do you handle state management in complex React applications?",
            &["state", "redux", "context", "hooks", "mobx"],
        ),
        (
            "What steps would you take to improve the performance of a React app?",
            &["performance", "memo", "shouldcomponentupdate", "code splitting", "lazy"],
        ),
    ],
    [
        (
            "Explain the difference between Flexbox and CSS Grid with examples.",
            &["flexbox", "css grid", "grid", "flex"],
        ),
        (
            "How do you make a web application responsive across all devices?",
            &["responsive", "media query", "breakpoint", "mobile-first"],
        ),
        (
            "Describe how you would debug a rendering issue in a component.",
            &["debug", "react devtools", "console", "inspector"],
        ),
    ],
    [
        (
            "What are React hooks and how have they improved component reusability?",
            &["hooks", "useeffect", "usestate", "custom hook"],
        ),
        (
            "How do you handle accessibility (a11y) in your frontend projects?",
            &["accessibility", "a11y", "aria", "screen reader"],
        ),
        (
            "Can you explain event delegation and give an example from your work?",
            &["event delegation", "event bubbling", "event capturing"],
        ),
    ],
];

const BACKEND_DEVELOPER: [Group; 3] = [
    [
        (
            "Explain how RESTful APIs work and how you secure them.",
            &["rest", "http", "endpoints", "json"],
        ),
        (
            "What’s the difference between synchronous and asynchronous programming?",
            &["synchronous", "asynchronous", "async", "await", "callbacks"],
        ),
        (
            "How do you optimize database queries for performance?",
            &["indexes", "query", "database", "optimization"],
        ),
    ],
    [
        (
            "How would you handle file uploads securely on a server?",
            &["file upload", "multipart", "stream", "validation"],
        ),
        (
            "What are web sockets and how have you used them?",
            &["websocket", "socket.io", "real-time"],
        ),
        (
            "Explain load balancing and its importance.",
            &["load balancing", "nginx", "round-robin", "scaling"],
        ),
    ],
    [
        (
            "Describe how you would design an authentication system from scratch.",
            &["authentication", "jwt", "oauth", "password hashing"],
        ),
        (
            "What’s the role of middleware in backend frameworks?",
            &["middleware", "express", "pipeline"],
        ),
        (
            "How do you manage environment configurations safely?",
            &["env", "configuration", "secrets", "dotenv"],
        ),
    ],
];

const SOFTWARE_ENGINEER: [Group; 3] = [
    [
        (
            "What design patterns have you implemented in your projects?",
            &["singleton", "factory", "observer", "strategy", "design pattern"],
        ),
        (
            "Explain SOLID principles and how they improve code quality.",
            &["solid", "single responsibility", "open closed", "liskov"],
        ),
        (
            "Describe a complex bug you fixed and how you approached it.",
            &["debug", "root cause", "reproduce"],
        ),
    ],
    [
        (
            "How do you ensure scalability and maintainability in software design?",
            &["scalability", "architecture", "microservices", "monolith"],
        ),
        (
            "What’s your approach to version control and branching strategy?",
            &["git", "branch", "feature branch", "gitflow"],
        ),
        (
            "How do you perform code reviews effectively?",
            &["code review", "lint", "static analysis"],
        ),
    ],
    [
        (
            "What’s your experience with CI/CD pipelines?",
            &["ci/cd", "jenkins", "github actions", "pipeline"],
        ),
        (
            "Explain test-driven development and its benefits.",
            &["tdd", "unit test", "jest"],
        ),
        (
            "How do you handle performance bottlenecks in large applications?",
            &["profiling", "optimizer", "benchmark"],
        ),
    ],
];

const FULL_STACK_ENGINEER: [Group; 3] = [
    [
        (
            "Explain how the frontend and backend communicate in your stack.",
            &["api", "http", "rest", "graphql"],
        ),
        (
            "How do you ensure consistency between client and server validation?",
            &["validation", "client side", "server side", "consistency"],
        ),
        (
            "What challenges have you faced managing both client and server?",
            &["deployment", "devops", "coordination"],
        ),
    ],
    [
        (
            "Describe a MERN or similar stack project you worked on.",
            &["mern", "node", "express", "react", "mongo"],
        ),
        (
            "How do you handle authentication across frontend and backend?",
            &["authentication", "tokens", "session"],
        ),
        (
            "What’s your strategy for deployment and environment setup?",
            &["docker", "pm2", "deployment"],
        ),
    ],
    [
        (
            "How do you integrate third-party APIs efficiently?",
            &["api integration", "rate limit", "retry"],
        ),
        (
            "What are some best practices for full-stack debugging?",
            &["debugging", "logs", "monitoring"],
        ),
        (
            "Explain how you optimize data flow in full-stack apps.",
            &["data flow", "state management", "caching"],
        ),
    ],
];

const DATA_SCIENCE: [Group; 3] = [
    [
        (
            "Explain the difference between supervised and unsupervised learning.",
            &["supervised", "unsupervised", "labels", "clustering", "classification"],
        ),
        (
            "How do you handle missing data in a dataset?",
            &["missing", "imputation", "dropna", "interpolation"],
        ),
        (
            "What’s the purpose of feature scaling?",
            &["feature scaling", "standardize", "normalize"],
        ),
    ],
    [
        (
            "Describe how you evaluate the performance of a ML model.",
            &["accuracy", "precision", "recall", "f1"],
        ),
        (
            "What’s overfitting, and how do you prevent it?",
            &["overfitting", "regularization", "cross validation"],
        ),
        (
            "Explain precision, recall, and F1-score with an example.",
            &["confusion matrix", "roc", "auc"],
        ),
    ],
    [
        (
            "How do you select important features for a model?",
            &["feature selection", "pca", "feature importance"],
        ),
        (
            "What’s the difference between bagging and boosting?",
            &["bagging", "boosting", "xgboost"],
        ),
        (
            "Describe your process for building a data pipeline.",
            &["pipeline", "etl", "airflow"],
        ),
    ],
];

const DATA_ANALYST: [Group; 3] = [
    [
        (
            "Explain how you clean and preprocess raw data.",
            &["clean", "preprocess", "pandas", "normalize", "formatting"],
        ),
        (
            "What’s the difference between inner join and left join?",
            &["join", "inner join", "left join", "sql"],
        ),
        (
            "How do you detect anomalies in datasets?",
            &["anomaly", "outlier", "z-score"],
        ),
    ],
    [
        (
            "Describe how you would create a dashboard using Power BI or Tableau.",
            &["dashboard", "tableau", "power bi", "visualization"],
        ),
        (
            "What are KPIs and how do you decide which to track?",
            &["kpi", "key performance indicator"],
        ),
        (
            "How do you ensure data accuracy when reporting?",
            &["accuracy", "validation", "reconciliation"],
        ),
    ],
    [
        (
            "What’s your process for communicating insights to non-technical teams?",
            &["communication", "stakeholder", "presentation"],
        ),
        (
            "Explain correlation vs causation with an example.",
            &["correlation", "causation", "regression"],
        ),
        (
            "How do you handle large datasets efficiently in Excel or SQL?",
            &["excel", "sql", "sampling"],
        ),
    ],
];
