// tests/support/mocks/todos.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use jotter_core::domain::errors::{DomainError, DomainResult};
use jotter_core::domain::todo::{
    NewProject, NewTodo, NewTodoCategory, Project, ProjectId, ProjectRepository, Todo,
    TodoCategory, TodoCategoryId, TodoCategoryRepository, TodoId, TodoListFilter,
    TodoRepository, TodoStatus, TodoUpdate,
};
use jotter_core::domain::user::UserId;

#[derive(Default)]
struct State {
    todos: BTreeMap<i64, Todo>,
    categories: BTreeMap<i64, TodoCategory>,
    projects: BTreeMap<i64, Project>,
}

fn next_key<V>(map: &BTreeMap<i64, V>) -> i64 {
    map.keys().next_back().copied().unwrap_or(0) + 1
}

/// Todos, todo categories and projects behind one lock.
#[derive(Default)]
pub struct InMemoryTodos {
    inner: Mutex<State>,
}

impl InMemoryTodos {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: i64) -> Option<Todo> {
        self.inner.lock().unwrap().todos.get(&id).cloned()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodos {
    async fn insert(&self, todo: NewTodo) -> DomainResult<Todo> {
        let mut state = self.inner.lock().unwrap();
        let id = next_key(&state.todos);
        let created = Todo {
            id: TodoId::new(id)?,
            owner_id: todo.owner_id,
            title: todo.title,
            description: todo.description,
            status: TodoStatus::default(),
            priority: todo.priority,
            due_date: todo.due_date,
            category_id: todo.category_id,
            project_id: todo.project_id,
            completed_at: None,
            created_at: todo.created_at,
            updated_at: todo.created_at,
        };
        state.todos.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: TodoUpdate) -> DomainResult<Todo> {
        let mut state = self.inner.lock().unwrap();
        let todo = state
            .todos
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("todo not found".into()))?;
        if let Some(title) = update.title {
            todo.title = title;
        }
        if let Some(description) = update.description {
            todo.description = description;
        }
        if let Some(status) = update.status {
            todo.status = status;
        }
        if let Some(priority) = update.priority {
            todo.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            todo.due_date = due_date;
        }
        if let Some(category_id) = update.category_id {
            todo.category_id = category_id;
        }
        if let Some(project_id) = update.project_id {
            todo.project_id = project_id;
        }
        if let Some(completed_at) = update.completed_at {
            todo.completed_at = completed_at;
        }
        todo.updated_at = update.updated_at;
        Ok(todo.clone())
    }

    async fn delete(&self, id: TodoId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .todos
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("todo not found".into()))
    }

    async fn find_owned(&self, id: TodoId, owner: UserId) -> DomainResult<Option<Todo>> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .todos
            .get(&i64::from(id))
            .filter(|t| t.owner_id == owner)
            .cloned())
    }

    async fn list_owned(&self, owner: UserId, filter: TodoListFilter) -> DomainResult<Vec<Todo>> {
        let state = self.inner.lock().unwrap();
        let mut todos: Vec<Todo> = state
            .todos
            .values()
            .filter(|t| t.owner_id == owner)
            .filter(|t| filter.status.is_none_or(|s| t.status == s))
            .filter(|t| filter.priority.is_none_or(|p| t.priority == p))
            .filter(|t| filter.category_id.is_none_or(|c| t.category_id == Some(c)))
            .filter(|t| filter.project_id.is_none_or(|p| t.project_id == Some(p)))
            .cloned()
            .collect();
        todos.sort_by(|a, b| {
            b.priority
                .rank()
                .cmp(&a.priority.rank())
                .then_with(|| match (a.due_date, b.due_date) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                })
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(todos)
    }
}

#[async_trait]
impl TodoCategoryRepository for InMemoryTodos {
    async fn insert(&self, category: NewTodoCategory) -> DomainResult<TodoCategory> {
        let mut state = self.inner.lock().unwrap();
        if state.categories.values().any(|c| c.name == category.name) {
            return Err(DomainError::Conflict("todo_categories.name".into()));
        }
        let id = next_key(&state.categories);
        let created = TodoCategory {
            id: TodoCategoryId::new(id)?,
            name: category.name,
            color: category.color,
            created_at: category.created_at,
            updated_at: category.created_at,
        };
        state.categories.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: TodoCategoryId) -> DomainResult<Option<TodoCategory>> {
        let state = self.inner.lock().unwrap();
        Ok(state.categories.get(&i64::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<TodoCategory>> {
        let state = self.inner.lock().unwrap();
        let mut categories: Vec<TodoCategory> = state.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }
}

#[async_trait]
impl ProjectRepository for InMemoryTodos {
    async fn insert(&self, project: NewProject) -> DomainResult<Project> {
        let mut state = self.inner.lock().unwrap();
        let id = next_key(&state.projects);
        let created = Project {
            id: ProjectId::new(id)?,
            owner_id: project.owner_id,
            name: project.name,
            description: project.description,
            created_at: project.created_at,
            updated_at: project.created_at,
        };
        state.projects.insert(id, created.clone());
        Ok(created)
    }

    async fn find_owned(&self, id: ProjectId, owner: UserId) -> DomainResult<Option<Project>> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .projects
            .get(&i64::from(id))
            .filter(|p| p.owner_id == owner)
            .cloned())
    }

    async fn list_owned(&self, owner: UserId) -> DomainResult<Vec<Project>> {
        let state = self.inner.lock().unwrap();
        let mut projects: Vec<Project> = state
            .projects
            .values()
            .filter(|p| p.owner_id == owner)
            .cloned()
            .collect();
        projects.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(projects)
    }
}
