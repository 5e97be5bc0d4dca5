//! Translation tables and lookup
//!
//! Every user-visible string goes through [`Translator::t`]. Form logic only
//! deals in structured error values; the text is resolved here at render time.

use serde::{Deserialize, Serialize};

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    pub fn toggle(self) -> Self {
        match self {
            Self::En => Self::Pt,
            Self::Pt => Self::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Pt => "PT",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => EN,
            Self::Pt => PT,
        }
    }
}

/// Resolves translation keys for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Look up `key`, falling back to `default` when the table has no entry
    pub fn t(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or(default).to_string()
    }

    fn lookup(&self, key: &str) -> Option<&'static str> {
        self.language
            .table()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

const EN: &[(&str, &str)] = &[
    ("titles.title", "Build Your Project"),
    ("titles.newProject", "New Project"),
    ("titles.myProjects", "My Projects"),
    ("titles.error", "Error"),
    ("messages.welcome", "Welcome to Build Your Project"),
    ("messages.darkMode", "Dark Mode"),
    ("messages.lightMode", "Light Mode"),
    ("messages.changeLanguage", "Change Language"),
    ("messages.emailCantBeEmpty", "Email cannot be empty"),
    ("messages.invalidEmailFormat", "Invalid email format"),
    ("messages.emailAlreadyAdded", "This email has already been added"),
    ("messages.projectNameRequired", "Project name is required"),
    ("messages.projectDescriptionRequired", "Project description is required"),
    ("messages.startDateRequired", "Start date is required"),
    ("messages.dueDateRequired", "Due date is required"),
    ("messages.invalidDate", "Use the YYYY-MM-DD format"),
    ("messages.dueDateBeforeStart", "Due date cannot be before the start date"),
    ("messages.errorNewProject", "Error creating new project"),
    ("messages.serviceUnavailable", "Service unavailable or session expired. Please log in again."),
    ("messages.emailMessage", "Type an email and press Enter"),
    ("messages.projectCreated", "Project created!"),
    ("messages.noProjects", "No projects yet. Press n to create one."),
    ("messages.loadingProjects", "Loading projects..."),
    ("messages.errorLoadingProjects", "Could not load projects"),
    ("messages.noCollaborators", "No collaborators added"),
    ("buttons.createProject", "Create Project"),
    ("buttons.next", "Next"),
    ("buttons.back", "Back"),
    ("buttons.cancel", "Cancel"),
    ("buttons.save", "Save"),
    ("buttons.saving", "Saving..."),
    ("inputs.name", "Name"),
    ("inputs.description", "Description"),
    ("inputs.email", "Email"),
    ("inputs.projectType", "Project Type"),
    ("inputs.template", "Template"),
    ("inputs.startDate", "Start Date (YYYY-MM-DD)"),
    ("inputs.dueDate", "Due Date (YYYY-MM-DD)"),
    ("inputs.collaborators", "Collaborators"),
    ("titles.newTask", "New Task"),
    ("titles.login", "Login"),
    ("messages.taskNameRequired", "Task name is required"),
    ("messages.taskDescriptionRequired", "Task description is required"),
    ("messages.responsibleRequired", "Select a responsible person"),
    ("messages.errorNewTask", "Error creating new task"),
    ("messages.taskCreated", "Task created!"),
    ("messages.selectProjectFirst", "Select a project first"),
    ("messages.passwordRequired", "Password is required"),
    ("messages.invalidCredentials", "Invalid credentials. Check your email and password."),
    ("messages.loggedIn", "Logged in"),
    ("buttons.login", "Login"),
    ("buttons.loggingIn", "Logging in..."),
    ("inputs.selectResponsible", "Responsible"),
    ("inputs.password", "Password"),
    ("wizard.stepBasics", "Basic info"),
    ("wizard.stepSchedule", "Dates & collaborators"),
    ("wizard.stepReview", "Review"),
    ("wizard.step", "Step"),
];

const PT: &[(&str, &str)] = &[
    ("titles.title", "Build your Project"),
    ("titles.newProject", "Novo Projeto"),
    ("titles.myProjects", "Meus Projetos"),
    ("titles.error", "Erro"),
    ("messages.welcome", "Bem-vindo ao Build Your Project"),
    ("messages.darkMode", "Modo Escuro"),
    ("messages.lightMode", "Modo Claro"),
    ("messages.changeLanguage", "Mudar Idioma"),
    ("messages.emailCantBeEmpty", "Email não pode estar vazio."),
    ("messages.invalidEmailFormat", "Formato de email inválido."),
    ("messages.emailAlreadyAdded", "Este email já foi adicionado."),
    ("messages.projectNameRequired", "O nome do projeto é obrigatório."),
    ("messages.projectDescriptionRequired", "A descrição é obrigatória."),
    ("messages.startDateRequired", "A data de início é obrigatória."),
    ("messages.dueDateRequired", "A data de entrega é obrigatória."),
    ("messages.invalidDate", "Use o formato AAAA-MM-DD."),
    ("messages.dueDateBeforeStart", "A data de entrega não pode ser anterior à data de início."),
    ("messages.errorNewProject", "Erro inesperado ao criar projeto."),
    ("messages.serviceUnavailable", "Serviço indisponível ou sessão expirada. Faça login novamente."),
    ("messages.emailMessage", "Digite um email e pressione Enter"),
    ("messages.projectCreated", "Projeto criado!"),
    ("messages.noProjects", "Nenhum projeto ainda. Pressione n para criar."),
    ("messages.loadingProjects", "Carregando projetos..."),
    ("messages.errorLoadingProjects", "Não foi possível carregar os projetos"),
    ("messages.noCollaborators", "Nenhum colaborador adicionado"),
    ("buttons.createProject", "Criar Projeto"),
    ("buttons.next", "Próximo"),
    ("buttons.back", "Voltar"),
    ("buttons.cancel", "Cancelar"),
    ("buttons.save", "Salvar"),
    ("buttons.saving", "Salvando..."),
    ("inputs.name", "Nome"),
    ("inputs.description", "Descrição"),
    ("inputs.email", "E-mail"),
    ("inputs.projectType", "Tipo de Projeto"),
    ("inputs.template", "Modelo"),
    ("inputs.startDate", "Data de Início (AAAA-MM-DD)"),
    ("inputs.dueDate", "Data de Entrega (AAAA-MM-DD)"),
    ("inputs.collaborators", "Colaboradores"),
    ("titles.newTask", "Nova Tarefa"),
    ("titles.login", "Entrar"),
    ("messages.taskNameRequired", "O nome da tarefa é obrigatório."),
    ("messages.taskDescriptionRequired", "A descrição da tarefa é obrigatória."),
    ("messages.responsibleRequired", "Selecione um responsável."),
    ("messages.errorNewTask", "Erro inesperado ao criar tarefa."),
    ("messages.taskCreated", "Tarefa criada!"),
    ("messages.selectProjectFirst", "Selecione um projeto primeiro"),
    ("messages.passwordRequired", "A senha é obrigatória."),
    ("messages.invalidCredentials", "Credenciais inválidas. Verifique seu e-mail e senha."),
    ("messages.loggedIn", "Sessão iniciada"),
    ("buttons.login", "Entrar"),
    ("buttons.loggingIn", "Entrando..."),
    ("inputs.selectResponsible", "Responsável"),
    ("inputs.password", "Senha"),
    ("wizard.stepBasics", "Informações básicas"),
    ("wizard.stepSchedule", "Datas e colaboradores"),
    ("wizard.stepReview", "Revisão"),
    ("wizard.step", "Etapa"),
];
